use std::path::PathBuf;

/// Directory the generated icons ship from, next to the generator's sources
pub fn get_default_icons_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("icons")
}

/// File name for one exported size, e.g. `icon16.png`
pub fn get_icon_file_name(size: u32) -> String {
    format!("icon{}.png", size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_file_name() {
        assert_eq!(get_icon_file_name(16), "icon16.png");
        assert_eq!(get_icon_file_name(128), "icon128.png");
    }

    #[test]
    fn test_default_icons_dir() {
        let dir = get_default_icons_dir();
        assert!(dir.ends_with("icons"));
        assert!(dir.is_absolute());
    }
}
