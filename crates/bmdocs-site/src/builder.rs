//! Site configuration builder.

use crate::base_path::BasePathResolver;
use crate::config::{NavLink, SidebarGroup, SiteConfig, SiteOptions, SocialIcon, SocialLink};
use crate::env::{EnvNames, EnvSource};

/// Pages of the guide, in navigation order.
const GUIDE_PAGES: [(&str, &str); 4] = [
    ("Getting Started", "/getting-started"),
    ("Commands", "/commands"),
    ("Usage", "/workflows"),
    ("Store", "/store"),
];

/// Label of the single sidebar group.
const SIDEBAR_GROUP: &str = "Guide";

/// Builds a [`SiteConfig`] from options and the environment.
#[derive(Debug)]
pub struct SiteConfigBuilder {
    options: SiteOptions,
    resolver: BasePathResolver,
}

impl SiteConfigBuilder {
    /// Create a builder using the default environment variable names.
    pub fn new(options: SiteOptions) -> Self {
        Self::with_env_names(options, &EnvNames::default())
    }

    /// Create a builder reading the base path from the given variables.
    pub fn with_env_names(options: SiteOptions, names: &EnvNames) -> Self {
        Self {
            options,
            resolver: BasePathResolver::default_rules(names),
        }
    }

    /// Create a builder with a custom resolver.
    pub fn with_resolver(options: SiteOptions, resolver: BasePathResolver) -> Self {
        Self { options, resolver }
    }

    /// Build the site configuration. Always succeeds.
    pub fn build(&self, env: &dyn EnvSource) -> SiteConfig {
        let base = self.resolver.resolve(env);
        let opts = &self.options;

        let mut social_links = vec![SocialLink {
            icon: SocialIcon::Github,
            link: opts.source_url.clone(),
        }];
        if let Some(personal) = &opts.personal_link {
            social_links.push(SocialLink {
                icon: SocialIcon::Custom(personal.icon.clone()),
                link: personal.link.clone(),
            });
        }

        let config = SiteConfig {
            language: opts.language.clone(),
            title: opts.title.clone(),
            description: opts.description.clone(),
            base_path: base.value,
            navigation: guide_links(),
            sidebar_groups: vec![SidebarGroup {
                label: SIDEBAR_GROUP.to_string(),
                items: guide_links(),
            }],
            social_links,
            footer_message: opts.footer_message.clone(),
        };

        tracing::debug!(
            "Built site config '{}' with base path {} (rule '{}')",
            config.title,
            config.base_path,
            base.rule
        );

        config
    }
}

fn guide_links() -> Vec<NavLink> {
    GUIDE_PAGES
        .iter()
        .map(|(label, link)| NavLink::new(*label, *link))
        .collect()
}
