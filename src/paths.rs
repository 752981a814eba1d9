use std::{path::PathBuf, sync::LazyLock};

pub static DEFAULT_RIGUP_PATH: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Ok(custom) = std::env::var("RIGUP_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir().unwrap_or_default().join("Rigup")
});

/// Computes a path under the rigup data directory from the arguments.
///
/// Returns a `&Path` referencing the data directory itself if no arguments
/// are passed in, or a `PathBuf` created by joining all of the arguments to
/// the base directory if at least one argument is passed in.
#[macro_export]
macro_rules! rigup_path {
    () => {
        $crate::paths::DEFAULT_RIGUP_PATH.as_path()
    };

    ( $( $path:expr ),+ $(,)? ) => {
        [
            $crate::paths::DEFAULT_RIGUP_PATH.as_path(),
            $( std::path::Path::new(&$path) ),+
        ].into_iter().collect::<std::path::PathBuf>()
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_rigup_path_joins_components() {
        let base = crate::rigup_path!().to_path_buf();
        assert_eq!(crate::rigup_path!("logs"), base.join("logs"));
        assert_eq!(
            crate::rigup_path!("logs", "run.log"),
            base.join("logs").join("run.log")
        );
    }
}
