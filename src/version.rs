/// Version string baked in by `build.rs`, `dev` outside a git checkout.
pub const GIT_VERSION: &str = env!("GIT_VERSION");
