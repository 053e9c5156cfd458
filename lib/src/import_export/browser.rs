use std::path::{Path, PathBuf};

/// Chromium-family browser whose bookmarks file we know how to find
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserType {
    Opera,
    Chrome,
    Chromium,
    Edge,
    Brave,
}

impl BrowserType {
    pub const ALL: [BrowserType; 5] = [
        BrowserType::Opera,
        BrowserType::Chrome,
        BrowserType::Chromium,
        BrowserType::Edge,
        BrowserType::Brave,
    ];

    /// Get a user-friendly display name for the browser
    pub fn display_name(&self) -> &str {
        match self {
            BrowserType::Opera => "Opera",
            BrowserType::Chrome => "Chrome",
            BrowserType::Chromium => "Chromium",
            BrowserType::Edge => "Edge",
            BrowserType::Brave => "Brave",
        }
    }

    /// Parse browser type from string (case-insensitive)
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "opera" => Some(BrowserType::Opera),
            "chrome" | "google-chrome" => Some(BrowserType::Chrome),
            "chromium" => Some(BrowserType::Chromium),
            "edge" | "microsoft-edge" => Some(BrowserType::Edge),
            "brave" => Some(BrowserType::Brave),
            _ => None,
        }
    }

    /// Directory holding the browser's profile data, relative to the home directory
    fn user_data_dir(&self) -> &'static str {
        #[cfg(target_os = "macos")]
        let dir = match self {
            BrowserType::Opera => "Library/Application Support/com.operasoftware.Opera",
            BrowserType::Chrome => "Library/Application Support/Google/Chrome",
            BrowserType::Chromium => "Library/Application Support/Chromium",
            BrowserType::Edge => "Library/Application Support/Microsoft Edge",
            BrowserType::Brave => "Library/Application Support/BraveSoftware/Brave-Browser",
        };

        #[cfg(target_os = "windows")]
        let dir = match self {
            BrowserType::Opera => "AppData\\Roaming\\Opera Software\\Opera Stable",
            BrowserType::Chrome => "AppData\\Local\\Google\\Chrome\\User Data",
            BrowserType::Chromium => "AppData\\Local\\Chromium\\User Data",
            BrowserType::Edge => "AppData\\Local\\Microsoft\\Edge\\User Data",
            BrowserType::Brave => "AppData\\Local\\BraveSoftware\\Brave-Browser\\User Data",
        };

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let dir = match self {
            BrowserType::Opera => ".config/opera",
            BrowserType::Chrome => ".config/google-chrome",
            BrowserType::Chromium => ".config/chromium",
            BrowserType::Edge => ".config/microsoft-edge",
            BrowserType::Brave => ".config/BraveSoftware/Brave-Browser",
        };

        dir
    }

    /// Opera keeps a single profile directly in its data directory
    fn profile_dirs(&self) -> &'static [&'static str] {
        match self {
            BrowserType::Opera => &[""],
            _ => &["Default", "Profile 1", "Profile 2", "Profile 3", "Profile 4"],
        }
    }

    /// Location of the default profile's bookmarks file under `home`
    pub fn bookmarks_path_in(&self, home: &Path) -> PathBuf {
        let base = home.join(self.user_data_dir());
        match self.profile_dirs().first() {
            Some(profile) if !profile.is_empty() => base.join(profile).join("Bookmarks"),
            _ => base.join("Bookmarks"),
        }
    }
}

/// Browser profile location
#[derive(Debug, Clone)]
pub struct BrowserProfile {
    pub browser: BrowserType,
    pub profile_name: String,
    pub path: PathBuf,
}

impl BrowserProfile {
    pub fn display_string(&self) -> String {
        format!("{} ({})", self.browser.display_name(), self.profile_name)
    }
}

/// Detect installed browsers and their bookmark files for the current user
pub fn detect_browsers() -> Vec<BrowserProfile> {
    match crate::utils::home_dir() {
        Some(home) => detect_browsers_in(&home),
        None => Vec::new(),
    }
}

/// Detect bookmark files of every known browser below `home`
pub fn detect_browsers_in(home: &Path) -> Vec<BrowserProfile> {
    let mut profiles = Vec::new();

    for browser in BrowserType::ALL {
        let base_path = home.join(browser.user_data_dir());
        if !base_path.exists() {
            continue;
        }

        for profile_name in browser.profile_dirs() {
            let bookmarks_path = base_path.join(profile_name).join("Bookmarks");
            if bookmarks_path.is_file() {
                let profile_name = if profile_name.is_empty() {
                    "Default"
                } else {
                    *profile_name
                };
                profiles.push(BrowserProfile {
                    browser,
                    profile_name: profile_name.to_string(),
                    path: bookmarks_path,
                });
            }
        }
    }

    profiles
}
