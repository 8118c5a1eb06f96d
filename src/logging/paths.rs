use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the log directory
///
/// Resolution order:
/// 1. Custom directory from parameter (if provided)
/// 2. CURRENCY_TEXT_LOG_DIR environment variable
/// 3. Platform-specific default (system, then user)
/// 4. Temp directory as last resort
pub fn get_log_directory(custom_dir: Option<&str>) -> Result<PathBuf, std::io::Error> {
    if let Some(dir) = custom_dir {
        return ensure_directory_exists(PathBuf::from(dir));
    }

    if let Ok(dir) = env::var("CURRENCY_TEXT_LOG_DIR") {
        return ensure_directory_exists(PathBuf::from(dir));
    }

    let log_dir = platform_log_dirs()
        .into_iter()
        .find(|path| is_writable(path) || can_create(path))
        .unwrap_or_else(|| env::temp_dir().join("currency_text_logs"));

    ensure_directory_exists(log_dir)
}

/// Candidate log directories for this platform, most preferred first
fn platform_log_dirs() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if cfg!(target_os = "windows") {
        if let Some(local) = dirs::data_local_dir() {
            candidates.push(local.join("CurrencyText").join("logs"));
        }
    } else if cfg!(target_os = "macos") {
        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join("Library").join("Logs").join("CurrencyText"));
        }
    } else {
        candidates.push(PathBuf::from("/var/log/currency_text"));
        if let Some(local) = dirs::data_local_dir() {
            candidates.push(local.join("currency_text").join("logs"));
        }
    }

    candidates
}

/// Check if a directory is writable
fn is_writable(path: &Path) -> bool {
    if !path.exists() {
        return false;
    }
    // Try creating a temp file to check write permissions
    let test_file = path.join(".write_test");
    fs::write(&test_file, "test").is_ok() && {
        let _ = fs::remove_file(&test_file);
        true
    }
}

/// Check if we can create a directory
fn can_create(path: &Path) -> bool {
    if path.exists() {
        return is_writable(path);
    }
    match path.parent() {
        Some(parent) => parent.exists() && is_writable(parent),
        None => false,
    }
}

fn ensure_directory_exists(path: PathBuf) -> Result<PathBuf, std::io::Error> {
    if !path.exists() {
        fs::create_dir_all(&path)?;
    }
    Ok(path)
}
