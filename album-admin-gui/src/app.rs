use album_admin_core::{
    Album, AlbumDirectory, MAX_VISIBLE_PAGES, NavState, NavParams, PageItem, PageSizeSelector,
    Photo, User, avatar, compute_page_window, derive_page, format_page_size, index_users,
    page_count,
};
use iced::widget::{button, column, container, image, row, scrollable, text};
use iced::{Color, Element, Length, Task};
use std::collections::HashMap;

const THUMBNAIL_SIZE: f32 = 150.0;
const VIEWER_IMAGE_SIZE: f32 = 600.0;
const PHOTOS_PER_ROW: usize = 5;
const AVATAR_SIZE: f32 = 28.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Albums,
    Users,
    AlbumShow(u32),
    UserShow(u32),
}

#[derive(Debug, Clone)]
pub enum Message {
    NavigateTo(Route),
    Back,

    AlbumsLoaded(Result<(Vec<Album>, Vec<User>), String>),
    UsersLoaded(Result<Vec<User>, String>),
    AlbumDetailLoaded(Result<(Album, User, Vec<Photo>), String>),
    UserDetailLoaded(Result<(User, Vec<Album>), String>),

    // Pagination: every action becomes a new navigation state
    PageClicked(PageItem),
    PrevPage,
    NextPage,

    // Page-size combo
    SizeQueryChanged(String),
    ToggleSizeOptions,
    SizeSelected(u32),

    // Photo viewer
    OpenPhoto(usize),
    ClosePhoto,
    NextPhoto,
    PrevPhoto,
    PhotoLoaded(String, Result<Vec<u8>, String>),
}

pub struct AppState {
    route: Route,
    // Single source of truth for pagination; every widget reads it back
    nav_params: NavParams,
    history: Vec<(Route, NavParams)>,

    // Album list
    albums: Vec<Album>,
    users_by_id: HashMap<u32, User>,
    albums_loading: bool,

    // Users list
    users: Vec<User>,
    users_loading: bool,

    // Detail views
    detail_album: Option<Album>,
    detail_user: Option<User>,
    detail_photos: Vec<Photo>,
    detail_albums: Vec<Album>,
    detail_loading: bool,
    detail_error: Option<String>,

    size_selector: PageSizeSelector,

    // Photo viewer
    viewer_index: Option<usize>,
    photo_bytes: HashMap<String, Vec<u8>>,
}

impl AppState {
    pub fn new() -> Self {
        let nav = NavState::default();
        Self {
            route: Route::Albums,
            nav_params: nav.to_params(),
            history: Vec::new(),
            albums: Vec::new(),
            users_by_id: HashMap::new(),
            albums_loading: true,
            users: Vec::new(),
            users_loading: false,
            detail_album: None,
            detail_user: None,
            detail_photos: Vec::new(),
            detail_albums: Vec::new(),
            detail_loading: false,
            detail_error: None,
            size_selector: PageSizeSelector::new(nav.page_size),
            viewer_index: None,
            photo_bytes: HashMap::new(),
        }
    }
}

pub fn initialize() -> (AppState, Task<Message>) {
    (AppState::new(), load_albums())
}

fn load_albums() -> Task<Message> {
    Task::perform(fetch_albums_and_users(), Message::AlbumsLoaded)
}

async fn fetch_albums_and_users() -> Result<(Vec<Album>, Vec<User>), String> {
    let (albums, users) = tokio::join!(
        AlbumDirectory::fetch_albums(),
        AlbumDirectory::fetch_users()
    );
    Ok((
        albums.map_err(|e| e.to_string())?,
        users.map_err(|e| e.to_string())?,
    ))
}

async fn fetch_album_detail(id: u32) -> Result<(Album, User, Vec<Photo>), String> {
    let album = AlbumDirectory::fetch_album(id)
        .await
        .map_err(|e| e.to_string())?;
    let (user, photos) = tokio::join!(
        AlbumDirectory::fetch_user(album.user_id),
        AlbumDirectory::fetch_album_photos(id)
    );
    Ok((
        album,
        user.map_err(|e| e.to_string())?,
        photos.map_err(|e| e.to_string())?,
    ))
}

async fn fetch_user_detail(id: u32) -> Result<(User, Vec<Album>), String> {
    let user = AlbumDirectory::fetch_user(id)
        .await
        .map_err(|e| e.to_string())?;
    let albums = AlbumDirectory::fetch_user_albums(id)
        .await
        .map_err(|e| e.to_string())?;
    Ok((user, albums))
}

fn fetch_photo_task(url: String) -> Task<Message> {
    Task::perform(
        async move {
            let result = AlbumDirectory::fetch_image_bytes(&url)
                .await
                .map_err(|e| e.to_string());
            (url, result)
        },
        |(url, result)| Message::PhotoLoaded(url, result),
    )
}

/// Re-issue the fetch for whatever route the state currently points at.
/// Datasets are created on mount and discarded on navigation away.
fn refresh_route(state: &mut AppState) -> Task<Message> {
    state.detail_error = None;
    state.viewer_index = None;
    match state.route {
        Route::Albums => {
            state.albums_loading = true;
            load_albums()
        }
        Route::Users => {
            state.users_loading = true;
            Task::perform(
                async { AlbumDirectory::fetch_users().await.map_err(|e| e.to_string()) },
                Message::UsersLoaded,
            )
        }
        Route::AlbumShow(id) => {
            state.detail_loading = true;
            state.detail_album = None;
            state.detail_user = None;
            state.detail_photos.clear();
            Task::perform(fetch_album_detail(id), Message::AlbumDetailLoaded)
        }
        Route::UserShow(id) => {
            state.detail_loading = true;
            state.detail_user = None;
            state.detail_albums.clear();
            Task::perform(fetch_user_detail(id), Message::UserDetailLoaded)
        }
    }
}

pub fn update(state: &mut AppState, message: Message) -> Task<Message> {
    match message {
        Message::NavigateTo(route) => {
            state.history.push((state.route.clone(), state.nav_params.clone()));
            state.route = route;
            if state.route == Route::Albums {
                // Breadcrumb-style return: back to the first page, keeping
                // the current page size
                let nav = NavState::read(&state.nav_params);
                state.nav_params = NavState {
                    page: 1,
                    page_size: nav.page_size,
                }
                .to_params();
            }
            return refresh_route(state);
        }
        Message::Back => {
            if let Some((route, params)) = state.history.pop() {
                state.route = route;
                state.nav_params = params;
                state
                    .size_selector
                    .sync_selected(NavState::read(&state.nav_params).page_size);
                return refresh_route(state);
            }
        }
        Message::AlbumsLoaded(result) => {
            state.albums_loading = false;
            match result {
                Ok((albums, users)) => {
                    log::debug!("loaded {} albums, {} users", albums.len(), users.len());
                    state.albums = albums;
                    state.users_by_id = index_users(users);
                    state
                        .size_selector
                        .sync_selected(NavState::read(&state.nav_params).page_size);
                }
                Err(e) => {
                    // List views keep no visible error state; the failure is
                    // logged and the table renders empty.
                    log::error!("failed to fetch albums: {}", e);
                    state.albums.clear();
                    state.users_by_id.clear();
                }
            }
        }
        Message::UsersLoaded(result) => {
            state.users_loading = false;
            match result {
                Ok(users) => {
                    state.users = users;
                }
                Err(e) => {
                    log::error!("failed to fetch users: {}", e);
                    state.users.clear();
                }
            }
        }
        Message::AlbumDetailLoaded(result) => {
            state.detail_loading = false;
            match result {
                Ok((album, user, photos)) => {
                    let tasks: Vec<Task<Message>> = photos
                        .iter()
                        .filter(|photo| !state.photo_bytes.contains_key(&photo.thumbnail_url))
                        .map(|photo| fetch_photo_task(photo.thumbnail_url.clone()))
                        .collect();
                    state.detail_album = Some(album);
                    state.detail_user = Some(user);
                    state.detail_photos = photos;
                    return Task::batch(tasks);
                }
                Err(e) => {
                    log::error!("album detail fetch failed: {}", e);
                    state.detail_error =
                        Some("Failed to fetch album, user, or photos.".to_string());
                }
            }
        }
        Message::UserDetailLoaded(result) => {
            state.detail_loading = false;
            match result {
                Ok((user, albums)) => {
                    state.detail_user = Some(user);
                    state.detail_albums = albums;
                }
                Err(e) => {
                    log::error!("user detail fetch failed: {}", e);
                    state.detail_error = Some("Failed to fetch user or albums.".to_string());
                }
            }
        }
        Message::PageClicked(item) => {
            let nav = NavState::read(&state.nav_params);
            let count = page_count(state.albums.len(), nav.page_size);
            let target = item.target_page(nav.page, count);
            state.nav_params = nav.with_page(target);
        }
        Message::PrevPage => {
            let nav = NavState::read(&state.nav_params);
            if nav.can_go_prev() {
                state.nav_params = nav.with_page(nav.page - 1);
            }
        }
        Message::NextPage => {
            let nav = NavState::read(&state.nav_params);
            let count = page_count(state.albums.len(), nav.page_size);
            if nav.can_go_next(count) {
                state.nav_params = nav.with_page(nav.page + 1);
            }
        }
        Message::SizeQueryChanged(query) => {
            state.size_selector.set_query(query);
        }
        Message::ToggleSizeOptions => {
            if state.size_selector.is_open() {
                state.size_selector.blur();
            } else {
                state.size_selector.focus();
            }
        }
        Message::SizeSelected(size) => {
            state.size_selector.select(size);
            let nav = NavState::read(&state.nav_params);
            // Page is deliberately preserved across a size change
            state.nav_params = nav.with_page_size(size);
        }
        Message::OpenPhoto(index) => {
            if index < state.detail_photos.len() {
                state.viewer_index = Some(index);
                let url = state.detail_photos[index].url.clone();
                if !state.photo_bytes.contains_key(&url) {
                    return fetch_photo_task(url);
                }
            }
        }
        Message::ClosePhoto => {
            state.viewer_index = None;
        }
        Message::NextPhoto => {
            if let Some(index) = state.viewer_index {
                let len = state.detail_photos.len();
                if len > 0 {
                    let next = (index + 1) % len;
                    state.viewer_index = Some(next);
                    let url = state.detail_photos[next].url.clone();
                    if !state.photo_bytes.contains_key(&url) {
                        return fetch_photo_task(url);
                    }
                }
            }
        }
        Message::PrevPhoto => {
            if let Some(index) = state.viewer_index {
                let len = state.detail_photos.len();
                if len > 0 {
                    let prev = (index + len - 1) % len;
                    state.viewer_index = Some(prev);
                    let url = state.detail_photos[prev].url.clone();
                    if !state.photo_bytes.contains_key(&url) {
                        return fetch_photo_task(url);
                    }
                }
            }
        }
        Message::PhotoLoaded(url, result) => match result {
            Ok(bytes) => {
                state.photo_bytes.insert(url, bytes);
            }
            Err(e) => {
                log::warn!("failed to load photo {}: {}", url, e);
            }
        },
    }
    Task::none()
}

pub fn view(state: &AppState) -> Element<'_, Message> {
    let nav_bar = row![
        text("Album Admin").size(20),
        button("Albums").on_press(Message::NavigateTo(Route::Albums)),
        button("Users").on_press(Message::NavigateTo(Route::Users)),
    ]
    .spacing(10);

    let body = match &state.route {
        Route::Albums => view_albums(state),
        Route::Users => view_users(state),
        Route::AlbumShow(_) => view_album_show(state),
        Route::UserShow(_) => view_user_show(state),
    };

    let content = column![nav_bar, body].spacing(20).padding(20);

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn avatar_badge<'a>(name: &str) -> Element<'a, Message> {
    let color = avatar::avatar_color(name);
    let (r, g, b) = avatar::parse_hex_color(&color.background).unwrap_or((0x9c, 0xa3, 0xaf));
    let (tr, tg, tb) = avatar::parse_hex_color(&color.text).unwrap_or((0x1f, 0x29, 0x37));
    container(
        text(avatar::initials(name))
            .size(12)
            .color(Color::from_rgb8(tr, tg, tb)),
    )
    .style(move |_theme| container::Style {
        background: Some(Color::from_rgb8(r, g, b).into()),
        border: iced::Border {
            radius: (AVATAR_SIZE / 2.0).into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .width(Length::Fixed(AVATAR_SIZE))
    .height(Length::Fixed(AVATAR_SIZE))
    .center_x(Length::Fixed(AVATAR_SIZE))
    .center_y(Length::Fixed(AVATAR_SIZE))
    .into()
}

fn size_selector_widget(selector: &PageSizeSelector) -> Element<'_, Message> {
    let placeholder = selector.placeholder();
    let value = selector.display_value();
    let input = iced::widget::text_input(&placeholder, &value)
        .on_input(Message::SizeQueryChanged)
        .width(Length::Fixed(110.0));
    let toggle = button(text(if selector.is_open() { "v" } else { "^" }).size(12))
        .on_press(Message::ToggleSizeOptions)
        .padding(5);

    let mut widget = column![row![input, toggle].spacing(2)].spacing(2);
    if selector.is_open() {
        if selector.is_empty_state() {
            widget = widget.push(text("No matching page size").size(12));
        } else {
            for size in selector.filtered_options() {
                widget = widget.push(
                    button(text(format_page_size(size)).size(12))
                        .on_press(Message::SizeSelected(size))
                        .width(Length::Fixed(110.0))
                        .padding(4),
                );
            }
        }
    }
    widget.into()
}

fn pagination_controls<'a>(
    nav: NavState,
    total: usize,
    selector: &'a PageSizeSelector,
) -> Element<'a, Message> {
    let count = page_count(total, nav.page_size);

    let mut buttons = row![
        button(text("<"))
            .on_press_maybe(nav.can_go_prev().then_some(Message::PrevPage))
            .padding(5)
    ]
    .spacing(5);

    for item in compute_page_window(nav.page, count, MAX_VISIBLE_PAGES) {
        let widget = match item {
            PageItem::Page(n) => button(text(n.to_string()).size(14))
                // the current page is shown but not clickable
                .on_press_maybe((n != nav.page).then_some(Message::PageClicked(item)))
                .padding(5),
            PageItem::LeftEllipsis | PageItem::RightEllipsis => button(text("...").size(14))
                .on_press(Message::PageClicked(item))
                .padding(5),
        };
        buttons = buttons.push(widget);
    }

    buttons = buttons.push(
        button(text(">"))
            .on_press_maybe(nav.can_go_next(count).then_some(Message::NextPage))
            .padding(5),
    );

    row![buttons, size_selector_widget(selector)]
        .spacing(20)
        .into()
}

fn view_albums(state: &AppState) -> Element<'_, Message> {
    if state.albums_loading {
        return text("Loading...").size(16).into();
    }

    let nav = NavState::read(&state.nav_params);
    let paged = derive_page(&state.albums, nav.page, nav.page_size);

    let header = row![
        text("ID").size(16).width(Length::Fixed(60.0)),
        text("Title").size(16).width(Length::Fill),
        text("User").size(16).width(Length::Fixed(220.0)),
        text("Actions").size(16).width(Length::Fixed(80.0)),
    ]
    .spacing(10);

    let mut table = column![header].spacing(8);
    for album in paged {
        let user_cell: Element<Message> = match state.users_by_id.get(&album.user_id) {
            Some(user) => row![
                avatar_badge(&user.name),
                button(text(user.name.clone()).size(14))
                    .on_press(Message::NavigateTo(Route::UserShow(user.id)))
                    .padding(2),
            ]
            .spacing(5)
            .into(),
            None => text("").into(),
        };

        table = table.push(
            row![
                text(album.id.to_string())
                    .size(14)
                    .width(Length::Fixed(60.0)),
                text(album.title.clone()).size(14).width(Length::Fill),
                container(user_cell).width(Length::Fixed(220.0)),
                button(text("Show").size(14))
                    .on_press(Message::NavigateTo(Route::AlbumShow(album.id)))
                    .padding(5),
            ]
            .spacing(10),
        );
    }

    if paged.is_empty() {
        table = table.push(text("No albums on this page.").size(14));
    }

    column![
        text("Albums").size(18),
        table,
        pagination_controls(nav, state.albums.len(), &state.size_selector),
    ]
    .spacing(15)
    .into()
}

fn view_users(state: &AppState) -> Element<'_, Message> {
    if state.users_loading {
        return text("Loading...").size(16).into();
    }

    let header = row![
        text("ID").size(16).width(Length::Fixed(40.0)),
        text("Name").size(16).width(Length::Fixed(200.0)),
        text("Email").size(16).width(Length::Fill),
        text("Phone").size(16).width(Length::Fixed(180.0)),
        text("Website").size(16).width(Length::Fixed(140.0)),
        text("Actions").size(16).width(Length::Fixed(80.0)),
    ]
    .spacing(10);

    let mut table = column![header].spacing(8);
    for user in &state.users {
        table = table.push(
            row![
                text(user.id.to_string()).size(14).width(Length::Fixed(40.0)),
                row![avatar_badge(&user.name), text(user.name.clone()).size(14)]
                    .spacing(5)
                    .width(Length::Fixed(200.0)),
                text(user.email.clone()).size(14).width(Length::Fill),
                text(user.phone.clone()).size(14).width(Length::Fixed(180.0)),
                text(user.website.clone())
                    .size(14)
                    .width(Length::Fixed(140.0)),
                button(text("Show").size(14))
                    .on_press(Message::NavigateTo(Route::UserShow(user.id)))
                    .padding(5),
            ]
            .spacing(10),
        );
    }

    column![text("Users").size(18), table].spacing(15).into()
}

fn photo_tile(state: &AppState, index: usize, photo: &Photo) -> Element<'static, Message> {
    match state.photo_bytes.get(&photo.thumbnail_url) {
        Some(bytes) => {
            let handle = image::Handle::from_bytes(bytes.clone());
            button(
                image::Image::<image::Handle>::new(handle)
                    .width(Length::Fixed(THUMBNAIL_SIZE))
                    .height(Length::Fixed(THUMBNAIL_SIZE)),
            )
            .on_press(Message::OpenPhoto(index))
            .padding(0)
            .into()
        }
        None => button(text("Loading...").size(10))
            .on_press(Message::OpenPhoto(index))
            .width(Length::Fixed(THUMBNAIL_SIZE))
            .height(Length::Fixed(THUMBNAIL_SIZE))
            .padding(0)
            .into(),
    }
}

fn photo_viewer(state: &AppState, index: usize) -> Element<'_, Message> {
    let photo = &state.detail_photos[index];
    let picture: Element<Message> = match state.photo_bytes.get(&photo.url) {
        Some(bytes) => {
            let handle = image::Handle::from_bytes(bytes.clone());
            image::Image::<image::Handle>::new(handle)
                .width(Length::Fixed(VIEWER_IMAGE_SIZE))
                .height(Length::Fixed(VIEWER_IMAGE_SIZE))
                .into()
        }
        None => container(text("Loading...").size(16))
            .width(Length::Fixed(VIEWER_IMAGE_SIZE))
            .height(Length::Fixed(VIEWER_IMAGE_SIZE))
            .center_x(Length::Fixed(VIEWER_IMAGE_SIZE))
            .center_y(Length::Fixed(VIEWER_IMAGE_SIZE))
            .into(),
    };

    column![
        row![
            button(text("<")).on_press(Message::PrevPhoto).padding(5),
            button(text("Close")).on_press(Message::ClosePhoto).padding(5),
            button(text(">")).on_press(Message::NextPhoto).padding(5),
            text(format!("{} / {}", index + 1, state.detail_photos.len())).size(14),
        ]
        .spacing(10),
        picture,
        text(photo.title.clone()).size(14),
    ]
    .spacing(10)
    .into()
}

fn breadcrumb<'a>(list_label: &'a str, list_route: Route) -> Element<'a, Message> {
    row![
        button(text(list_label).size(14))
            .on_press(Message::NavigateTo(list_route))
            .padding(2),
        text("/ Show").size(14),
        button(text("<-").size(14)).on_press(Message::Back).padding(2),
    ]
    .spacing(5)
    .into()
}

fn view_album_show(state: &AppState) -> Element<'_, Message> {
    if state.detail_loading {
        return text("Loading...").size(16).into();
    }
    if let Some(error) = &state.detail_error {
        return column![
            breadcrumb("Albums", Route::Albums),
            text(error.clone()).size(14).color(Color::from_rgb(0.8, 0.1, 0.1)),
        ]
        .spacing(10)
        .into();
    }
    let (Some(album), Some(user)) = (&state.detail_album, &state.detail_user) else {
        return text("Album or user not found.").size(14).into();
    };

    let owner = row![
        avatar_badge(&user.name),
        column![
            button(text(user.name.clone()).size(14))
                .on_press(Message::NavigateTo(Route::UserShow(user.id)))
                .padding(2),
            text(user.email.clone()).size(12),
        ]
        .spacing(2),
    ]
    .spacing(8);

    let photo_section: Element<Message> = if let Some(index) = state.viewer_index {
        photo_viewer(state, index)
    } else if state.detail_photos.is_empty() {
        text("No photos found.").size(14).into()
    } else {
        let mut grid = column![].spacing(5);
        for (row_index, photos) in state.detail_photos.chunks(PHOTOS_PER_ROW).enumerate() {
            let mut photo_row = row![].spacing(5);
            for (i, photo) in photos.iter().enumerate() {
                photo_row = photo_row.push(photo_tile(state, row_index * PHOTOS_PER_ROW + i, photo));
            }
            grid = grid.push(photo_row);
        }
        grid.into()
    };

    column![
        breadcrumb("Albums", Route::Albums),
        text("Show Album").size(20),
        owner,
        text(album.title.clone()).size(18),
        photo_section,
    ]
    .spacing(15)
    .into()
}

fn view_user_show(state: &AppState) -> Element<'_, Message> {
    if state.detail_loading {
        return text("Loading...").size(16).into();
    }
    if let Some(error) = &state.detail_error {
        return column![
            breadcrumb("Users", Route::Users),
            text(error.clone()).size(14).color(Color::from_rgb(0.8, 0.1, 0.1)),
        ]
        .spacing(10)
        .into();
    }
    let Some(user) = &state.detail_user else {
        return text("User not found.").size(14).into();
    };

    let user_card = row![
        avatar_badge(&user.name),
        column![
            text(user.name.clone()).size(16),
            text(format!("@{}", user.username)).size(12),
            text(user.email.clone()).size(12),
        ]
        .spacing(2),
    ]
    .spacing(8);

    let mut albums_table = column![
        row![
            text("ID").size(16).width(Length::Fixed(60.0)),
            text("Title").size(16).width(Length::Fill),
            text("Actions").size(16).width(Length::Fixed(80.0)),
        ]
        .spacing(10)
    ]
    .spacing(8);
    for album in &state.detail_albums {
        albums_table = albums_table.push(
            row![
                text(album.id.to_string())
                    .size(14)
                    .width(Length::Fixed(60.0)),
                text(album.title.clone()).size(14).width(Length::Fill),
                button(text("Show").size(14))
                    .on_press(Message::NavigateTo(Route::AlbumShow(album.id)))
                    .padding(5),
            ]
            .spacing(10),
        );
    }
    if state.detail_albums.is_empty() {
        albums_table = albums_table.push(text("No albums found.").size(14));
    }

    column![
        breadcrumb("Users", Route::Users),
        text("Show User").size(20),
        user_card,
        text("Albums").size(16),
        albums_table,
    ]
    .spacing(15)
    .into()
}
