//! Static asset URLs for icons and avatars.

use board_core::{Priority, Status};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Join `base` and an asset file name, escaping the file name
pub fn asset_url(base: &str, file: &str) -> String {
    let encoded = utf8_percent_encode(file, PATH_SEGMENT);
    if base.ends_with('/') {
        format!("{}{}", base, encoded)
    } else {
        format!("{}/{}", base, encoded)
    }
}

pub fn priority_icon(base: &str, priority: Priority) -> String {
    asset_url(base, priority.icon_file())
}

pub fn status_icon(base: &str, status: Status) -> String {
    asset_url(base, status.icon_file())
}
