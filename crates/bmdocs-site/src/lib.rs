//! Site configuration for the bm documentation.
//!
//! Builds the navigation, sidebar, social links and base path a static site
//! generator needs, and renders them as HTML partials.

pub mod base_path;
pub mod builder;
pub mod config;
pub mod env;
pub mod templates;

pub use base_path::{BasePathResolver, Resolution, ResolutionRule};
pub use builder::SiteConfigBuilder;
pub use config::{
    NavLink, PersonalLink, SidebarGroup, SiteConfig, SiteOptions, SocialIcon, SocialLink,
};
pub use env::{EnvNames, EnvSource, ProcessEnv};
pub use templates::{Partials, TemplateEngine, TemplateError};
