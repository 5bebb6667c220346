//! HTML partials rendered from a site configuration.
//!
//! A site generator can include these instead of rebuilding navigation,
//! sidebar and footer markup from the JSON configuration.

use minijinja::{context, Environment};
use serde::Serialize;

use crate::config::SiteConfig;

/// Errors that can occur while rendering partials.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Failed to load template {name}: {source}")]
    Load {
        name: &'static str,
        source: minijinja::Error,
    },

    #[error("Failed to render template: {0}")]
    Render(#[from] minijinja::Error),
}

/// A link with its final href.
#[derive(Debug, Clone, Serialize)]
struct LinkView {
    label: String,
    href: String,
}

#[derive(Debug, Clone, Serialize)]
struct GroupView {
    label: String,
    items: Vec<LinkView>,
}

#[derive(Debug, Clone, Serialize)]
struct SocialView {
    icon: String,
    href: String,
}

/// Rendered partials, keyed by output file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partials {
    pub nav: String,
    pub sidebar: String,
    pub footer: String,
}

impl Partials {
    /// File names and contents, in a stable order.
    pub fn files(&self) -> [(&'static str, &str); 3] {
        [
            ("nav.html", self.nav.as_str()),
            ("sidebar.html", self.sidebar.as_str()),
            ("footer.html", self.footer.as_str()),
        ]
    }
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in partials.
    pub fn new() -> Result<Self, TemplateError> {
        let mut env = Environment::new();

        for (name, source) in [
            ("nav.html", NAV_TEMPLATE),
            ("sidebar.html", SIDEBAR_TEMPLATE),
            ("footer.html", FOOTER_TEMPLATE),
        ] {
            env.add_template(name, source)
                .map_err(|source| TemplateError::Load { name, source })?;
        }

        Ok(Self { env })
    }

    /// Render a single partial.
    pub fn render(&self, template: &str, config: &SiteConfig) -> Result<String, TemplateError> {
        let tmpl = self.env.get_template(template)?;

        let nav: Vec<LinkView> = config
            .navigation
            .iter()
            .map(|l| LinkView {
                label: l.label.clone(),
                href: config.href(&l.link),
            })
            .collect();

        let sidebar: Vec<GroupView> = config
            .sidebar_groups
            .iter()
            .map(|g| GroupView {
                label: g.label.clone(),
                items: g
                    .items
                    .iter()
                    .map(|l| LinkView {
                        label: l.label.clone(),
                        href: config.href(&l.link),
                    })
                    .collect(),
            })
            .collect();

        let social: Vec<SocialView> = config
            .social_links
            .iter()
            .map(|s| SocialView {
                icon: s.icon.name().to_string(),
                href: s.link.clone(),
            })
            .collect();

        let html = tmpl.render(context! {
            title => &config.title,
            home => config.href("/"),
            nav => nav,
            sidebar => sidebar,
            social => social,
            footer_message => &config.footer_message,
        })?;

        Ok(html)
    }

    /// Render navigation, sidebar and footer.
    pub fn render_partials(&self, config: &SiteConfig) -> Result<Partials, TemplateError> {
        Ok(Partials {
            nav: self.render("nav.html", config)?,
            sidebar: self.render("sidebar.html", config)?,
            footer: self.render("footer.html", config)?,
        })
    }
}

const NAV_TEMPLATE: &str = r##"<div class="nav-header">
  <a href="{{ home }}" class="nav-logo">{{ title }}</a>
</div>
<ul class="nav-list">
{% for item in nav %}
  <li class="nav-item"><a href="{{ item.href }}">{{ item.label }}</a></li>
{% endfor %}
</ul>
<ul class="nav-social">
{% for link in social %}
  <li class="social-{{ link.icon }}"><a href="{{ link.href }}" aria-label="{{ link.icon }}">{{ link.icon }}</a></li>
{% endfor %}
</ul>"##;

const SIDEBAR_TEMPLATE: &str = r##"{% for group in sidebar %}<section class="sidebar-group">
  <h2>{{ group.label }}</h2>
  <ul>
  {% for item in group.items %}
    <li class="sidebar-item"><a href="{{ item.href }}">{{ item.label }}</a></li>
  {% endfor %}
  </ul>
</section>
{% endfor %}"##;

const FOOTER_TEMPLATE: &str = r##"{% if footer_message %}<footer class="footer">
  <p class="message">{{ footer_message | safe }}</p>
</footer>{% endif %}"##;
