//! Banner and version text.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DEVELOPER: &str = "Olivier M.K";
pub const HOMEPAGE: &str = "https://github.com/oliviermugishak";

pub const BANNER: &str = r"
 ______     ______     ______     ______     __     ______
/\  ___\   /\  == \   /\  __ \   /\  == \   /\ \   /\__  _\
\ \ \__ \  \ \  __<   \ \  __ \  \ \  __<   \ \ \  \/_/\ \/
 \ \_____\  \ \_\ \_\  \ \_\ \_\  \ \_____\  \ \_\    \ \_\
  \/_____/   \/_/ /_/   \/_/\/_/   \/_____/   \/_/     \/_/
   Grabit - Your All-in-One YouTube Downloader";

pub const EXAMPLES: &str = "\
Examples:
  grabit -urls=\"https://www.youtube.com/watch?v=ID\"
  grabit -urls=\"https://www.youtube.com/playlist?list=PLAYLIST_ID\" -audio
  grabit -urls=\"https://youtu.be/ID1,https://youtu.be/ID2\" -quality=720p -c 4";

pub fn version_text() -> String {
    format!(
        "Version: {}\nDeveloper: {}\nGitHub: {}",
        VERSION, DEVELOPER, HOMEPAGE
    )
}
