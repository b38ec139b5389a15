use album_admin_core::{
    AlbumDirectory, MAX_VISIBLE_PAGES, NavParams, NavState, PAGE_KEY, PAGE_SIZE_KEY, PageItem,
    compute_page_window, derive_page, index_users, page_count,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "album-admin-cli")]
#[command(about = "A CLI for browsing the JSONPlaceholder album directory")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List albums, one page at a time
    Albums {
        /// Page to show (1-based)
        #[arg(short, long)]
        page: Option<u32>,
        /// Rows per page (10, 20, 50 or 100)
        #[arg(short = 's', long)]
        page_size: Option<u32>,
        /// Raw navigation query string, e.g. "page=2&pageSize=20"
        /// (overrides --page/--page-size; invalid values fall back to defaults)
        #[arg(long)]
        nav: Option<String>,
    },
    /// List all users
    Users,
    /// Show one album with its photos
    Album {
        /// Album id
        id: u32,
    },
    /// Show one user with their albums
    User {
        /// User id
        id: u32,
    },
}

fn nav_params_from_args(page: Option<u32>, page_size: Option<u32>, nav: Option<String>) -> NavParams {
    if let Some(query) = nav {
        return NavParams::from_query(&query);
    }
    let mut params = NavParams::new();
    if let Some(page) = page {
        params.set(PAGE_KEY, page.to_string());
    }
    if let Some(size) = page_size {
        params.set(PAGE_SIZE_KEY, size.to_string());
    }
    params
}

fn render_page_window(current: u32, count: u32) -> String {
    compute_page_window(current, count, MAX_VISIBLE_PAGES)
        .iter()
        .map(|item| match item {
            PageItem::Page(n) if *n == current => format!("[{}]", n),
            PageItem::Page(n) => n.to_string(),
            PageItem::LeftEllipsis | PageItem::RightEllipsis => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Albums { page, page_size, nav } => {
            let params = nav_params_from_args(page, page_size, nav);
            let state = NavState::read(&params);

            let albums = match AlbumDirectory::fetch_albums().await {
                Ok(albums) => albums,
                Err(e) => {
                    eprintln!("Failed to fetch albums: {}", e);
                    std::process::exit(1);
                }
            };
            let users = match AlbumDirectory::fetch_users().await {
                Ok(users) => index_users(users),
                Err(e) => {
                    eprintln!("Failed to fetch users: {}", e);
                    std::process::exit(1);
                }
            };

            let count = page_count(albums.len(), state.page_size);
            let paged = derive_page(&albums, state.page, state.page_size);

            println!("{:>4}  {:<50}  {}", "ID", "TITLE", "USER");
            for album in paged {
                let owner = users
                    .get(&album.user_id)
                    .map(|user| user.name.as_str())
                    .unwrap_or("-");
                println!("{:>4}  {:<50}  {}", album.id, album.title, owner);
            }
            if paged.is_empty() {
                println!("(no albums on page {})", state.page);
            }

            println!();
            println!(
                "Page {} of {} ({} albums)   {}",
                state.page,
                count,
                albums.len(),
                render_page_window(state.page, count)
            );
            if state.can_go_prev() {
                println!("  prev: ?{}", state.with_page(state.page - 1).to_query());
            }
            if state.can_go_next(count) {
                println!("  next: ?{}", state.with_page(state.page + 1).to_query());
            }
        }
        Commands::Users => {
            let users = match AlbumDirectory::fetch_users().await {
                Ok(users) => users,
                Err(e) => {
                    eprintln!("Failed to fetch users: {}", e);
                    std::process::exit(1);
                }
            };

            println!(
                "{:>4}  {:<22}  {:<14}  {:<28}  {:<22}  {}",
                "ID", "NAME", "USERNAME", "EMAIL", "PHONE", "WEBSITE"
            );
            for user in users {
                println!(
                    "{:>4}  {:<22}  {:<14}  {:<28}  {:<22}  {}",
                    user.id, user.name, user.username, user.email, user.phone, user.website
                );
            }
        }
        Commands::Album { id } => {
            let album = match AlbumDirectory::fetch_album(id).await {
                Ok(album) => album,
                Err(e) => {
                    eprintln!("Failed to fetch album {}: {}", id, e);
                    std::process::exit(1);
                }
            };
            let user = match AlbumDirectory::fetch_user(album.user_id).await {
                Ok(user) => user,
                Err(e) => {
                    eprintln!("Failed to fetch user {}: {}", album.user_id, e);
                    std::process::exit(1);
                }
            };
            let photos = match AlbumDirectory::fetch_album_photos(id).await {
                Ok(photos) => photos,
                Err(e) => {
                    eprintln!("Failed to fetch photos for album {}: {}", id, e);
                    std::process::exit(1);
                }
            };

            println!("Album {}: {}", album.id, album.title);
            println!("Owner: {} <{}>", user.name, user.email);
            println!();
            if photos.is_empty() {
                println!("No photos found.");
            } else {
                println!("Photos:");
                for photo in photos {
                    println!("  {:>5}  {:<50}  {}", photo.id, photo.title, photo.url);
                }
            }
        }
        Commands::User { id } => {
            let user = match AlbumDirectory::fetch_user(id).await {
                Ok(user) => user,
                Err(e) => {
                    eprintln!("Failed to fetch user {}: {}", id, e);
                    std::process::exit(1);
                }
            };
            let albums = match AlbumDirectory::fetch_user_albums(id).await {
                Ok(albums) => albums,
                Err(e) => {
                    eprintln!("Failed to fetch albums of user {}: {}", id, e);
                    std::process::exit(1);
                }
            };

            println!("User {}: {} (@{})", user.id, user.name, user.username);
            println!("Email:   {}", user.email);
            println!("Phone:   {}", user.phone);
            println!("Website: {}", user.website);
            println!();
            if albums.is_empty() {
                println!("No albums found.");
            } else {
                println!("Albums:");
                for album in albums {
                    println!("  {:>4}  {}", album.id, album.title);
                }
            }
        }
    }

    Ok(())
}
