//! Build script for finentry
//!
//! Embeds build-time information (git commit, dirty status, build timestamp)
//! for the CLI version banner.

fn main() {
    shadow_rs::ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build info");
}
