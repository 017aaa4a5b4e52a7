use crate::datatypes::Username;

/// Background colours for placeholder avatars.
pub const AVATAR_PALETTE: [&str; 8] = [
    "#f56a00", "#7265e6", "#ffbf00", "#00a2ae", "#87d068", "#108ee9", "#eb2f96", "#fa541c",
];

/// Pick the placeholder colour of a user.
///
/// The pick is a hash of the username so a user keeps the same colour across
/// renders and reloads.
#[must_use]
pub fn avatar_color(username: &Username) -> &'static str {
    // FNV-1a
    let hash = username
        .as_str()
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
        });
    let index = usize::try_from(hash % AVATAR_PALETTE.len() as u64).unwrap_or_default();
    AVATAR_PALETTE[index]
}
