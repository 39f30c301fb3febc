use std::path::Path;

/// Check whether a regular file exists at `path`.
///
/// Directories, symlinks to directories, and other non-regular entries
/// do not count.
pub fn is_regular_file(path: &Path) -> bool {
    path.is_file()
}

/// Copy a file, overwriting the destination.
///
/// Errors from the copy primitive keep their kind (a vanished source
/// still reads as NotFound) and gain the source/destination paths.
pub fn copy_file(src: &Path, dst: &Path) -> std::io::Result<()> {
    std::fs::copy(src, dst).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to copy {} to {}: {}", src.display(), dst.display(), e),
        )
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_file_success() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("sdkconfig.defaults.esp32");
        let dst = dir.path().join("sdkconfig.defaults");
        std::fs::write(&src, b"CONFIG_IDF_TARGET=\"esp32\"\nCONFIG_FREERTOS_HZ=1000\n").unwrap();

        copy_file(&src, &dst).unwrap();
        assert_eq!(
            std::fs::read_to_string(&dst).unwrap(),
            "CONFIG_IDF_TARGET=\"esp32\"\nCONFIG_FREERTOS_HZ=1000\n"
        );
    }

    #[test]
    fn test_copy_file_overwrites_destination() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("sdkconfig.defaults.esp32c3");
        let dst = dir.path().join("sdkconfig.defaults");
        std::fs::write(&src, b"CONFIG_FOO=1\n").unwrap();
        std::fs::write(&dst, b"CONFIG_STALE=y\nCONFIG_FROM_LAST_BUILD=y\n").unwrap();

        copy_file(&src, &dst).unwrap();
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "CONFIG_FOO=1\n");
    }

    #[test]
    fn test_copy_file_source_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("sdkconfig.defaults.esp32h2");
        let dst = dir.path().join("sdkconfig.defaults");

        let err = copy_file(&src, &dst).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        // Contextual wrapper names both endpoints
        assert!(err.to_string().contains("sdkconfig.defaults.esp32h2"));
        assert!(err.to_string().contains(&dst.display().to_string()));
    }

    #[test]
    fn test_is_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("sdkconfig.defaults.esp32");
        std::fs::write(&file, b"CONFIG_FOO=1\n").unwrap();

        assert!(is_regular_file(&file));
        assert!(!is_regular_file(dir.path()));
        assert!(!is_regular_file(&dir.path().join("sdkconfig.defaults.esp32c3")));
    }
}
