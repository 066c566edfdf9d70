/// Application name, used in log targets and user-facing output.
pub const APP_NAME: &str = "alticons";

/// Reserved name of the primary icon set.
pub const PRIMARY_ICON_SET_NAME: &str = "AppIcon";

/// Folder extension marking an icon set inside a catalog.
pub const ICON_SET_EXTENSION: &str = "appiconset";

/// Descriptor file listing the images of an icon set.
pub const DESCRIPTOR_FILE_NAME: &str = "Contents.json";

/// Extension of every image copied into the bundle.
pub const IMAGE_EXTENSION: &str = "png";

/// Manifest file name used when no explicit manifest path is configured.
pub const DEFAULT_MANIFEST_NAME: &str = "Info.plist";
