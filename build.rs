//! Retrieves information about the version of the crate from Git and the build
//! environment so that the binary can report exactly what it was built from.

fn main() -> shadow_rs::SdResult<()> {
    shadow_rs::new()
}
