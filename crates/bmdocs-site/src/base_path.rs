//! Base path resolution.
//!
//! The base path is the URL prefix the site is served under. It is picked by
//! walking an ordered list of rules against the environment; the first rule
//! that yields a value wins. The last rule always yields `/`.

use crate::env::{EnvNames, EnvSource};

/// Base path used when nothing else applies.
pub const ROOT_PATH: &str = "/";

type RuleFn = Box<dyn Fn(&dyn EnvSource) -> Option<String> + Send + Sync>;

/// A named `(predicate, value)` pair. Returning `None` means the rule does not apply.
pub struct ResolutionRule {
    name: &'static str,
    resolve: RuleFn,
}

impl ResolutionRule {
    /// Create a rule from a name and a resolver function.
    pub fn new<F>(name: &'static str, resolve: F) -> Self
    where
        F: Fn(&dyn EnvSource) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            name,
            resolve: Box::new(resolve),
        }
    }

    /// Explicit override: the variable's value, verbatim, when non-empty.
    pub fn override_var(var: impl Into<String>) -> Self {
        let var = var.into();
        Self::new("override", move |env| env.var(&var).filter(|v| !v.is_empty()))
    }

    /// Automated build: `/<name>/` from an `owner/name` repository identifier.
    pub fn ci_repository(flag: impl Into<String>, repository: impl Into<String>) -> Self {
        let flag = flag.into();
        let repository = repository.into();
        Self::new("ci-repository", move |env| {
            if !env.flag(&flag) {
                return None;
            }
            let identifier = env.var(&repository)?;
            repository_path(&identifier)
        })
    }

    /// Unconditional fallback to `/`.
    pub fn root() -> Self {
        Self::new("root", |_| Some(ROOT_PATH.to_string()))
    }

    /// Rule name, as reported in [`Resolution`].
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Evaluate this rule alone.
    pub fn evaluate(&self, env: &dyn EnvSource) -> Option<String> {
        (self.resolve)(env)
    }
}

impl std::fmt::Debug for ResolutionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Outcome of a resolution: the value and the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub rule: &'static str,
    pub value: String,
}

/// Ordered list of resolution rules, evaluated top to bottom.
#[derive(Debug)]
pub struct BasePathResolver {
    rules: Vec<ResolutionRule>,
}

impl BasePathResolver {
    /// Create a resolver from explicit rules. A root fallback is appended so
    /// resolution always terminates with a value.
    pub fn new(mut rules: Vec<ResolutionRule>) -> Self {
        rules.push(ResolutionRule::root());
        Self { rules }
    }

    /// The standard chain: override, then automated build, then `/`.
    pub fn default_rules(names: &EnvNames) -> Self {
        Self::new(vec![
            ResolutionRule::override_var(&names.base_override),
            ResolutionRule::ci_repository(&names.ci_flag, &names.repository),
        ])
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(ResolutionRule::name).collect()
    }

    /// Resolve the base path against an environment.
    pub fn resolve(&self, env: &dyn EnvSource) -> Resolution {
        for rule in &self.rules {
            if let Some(value) = rule.evaluate(env) {
                tracing::debug!("Base path {} resolved by rule '{}'", value, rule.name);
                if !is_slash_delimited(&value) {
                    tracing::warn!(
                        "Base path '{}' from rule '{}' should start and end with '/'",
                        value,
                        rule.name
                    );
                }
                return Resolution {
                    rule: rule.name,
                    value,
                };
            }
            tracing::debug!("Base path rule '{}' did not apply", rule.name);
        }

        // Only reachable if the fallback was removed from `rules`.
        Resolution {
            rule: "root",
            value: ROOT_PATH.to_string(),
        }
    }
}

/// `/<name>/` from `owner/name`, or `None` when the name component is missing.
fn repository_path(identifier: &str) -> Option<String> {
    let name = identifier.split('/').nth(1)?;
    if name.is_empty() {
        return None;
    }
    Some(format!("/{}/", name))
}

fn is_slash_delimited(path: &str) -> bool {
    path.starts_with('/') && path.ends_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve(vars: &[(&str, &str)]) -> Resolution {
        let env: HashMap<&str, &str> = vars.iter().copied().collect();
        BasePathResolver::default_rules(&EnvNames::default()).resolve(&env)
    }

    #[test]
    fn override_wins_over_everything() {
        let r = resolve(&[
            ("DOCS_BASE", "/custom/"),
            ("GITHUB_ACTIONS", "true"),
            ("GITHUB_REPOSITORY", "owner/myrepo"),
        ]);

        assert_eq!(r.value, "/custom/");
        assert_eq!(r.rule, "override");
    }

    #[test]
    fn override_is_used_verbatim() {
        let r = resolve(&[("DOCS_BASE", "docs")]);

        assert_eq!(r.value, "docs");
    }

    #[test]
    fn whitespace_override_is_used_verbatim() {
        let r = resolve(&[
            ("DOCS_BASE", " "),
            ("GITHUB_ACTIONS", "true"),
            ("GITHUB_REPOSITORY", "owner/myrepo"),
        ]);

        assert_eq!(r.value, " ");
        assert_eq!(r.rule, "override");
    }

    #[test]
    fn any_non_empty_override_wins_in_ci() {
        for value in ["/", "/a/", "a", " /x/ ", "/deep/path/", "\t", "https://cdn.example/docs/"] {
            let r = resolve(&[
                ("DOCS_BASE", value),
                ("GITHUB_ACTIONS", "true"),
                ("GITHUB_REPOSITORY", "owner/myrepo"),
            ]);

            assert_eq!(r.value, value);
            assert_eq!(r.rule, "override");
        }
    }

    #[test]
    fn repository_name_is_taken_as_is() {
        let r = resolve(&[
            ("GITHUB_ACTIONS", "true"),
            ("GITHUB_REPOSITORY", "owner/ my"),
        ]);

        assert_eq!(r.value, "/ my/");
    }

    #[test]
    fn empty_override_is_ignored() {
        let r = resolve(&[
            ("DOCS_BASE", ""),
            ("GITHUB_ACTIONS", "true"),
            ("GITHUB_REPOSITORY", "owner/myrepo"),
        ]);

        assert_eq!(r.value, "/myrepo/");
        assert_eq!(r.rule, "ci-repository");
    }

    #[test]
    fn ci_derives_repository_name() {
        let r = resolve(&[
            ("GITHUB_ACTIONS", "true"),
            ("GITHUB_REPOSITORY", "owner/myrepo"),
        ]);

        assert_eq!(r.value, "/myrepo/");
    }

    #[test]
    fn local_build_uses_root() {
        let r = resolve(&[("GITHUB_REPOSITORY", "owner/myrepo")]);

        assert_eq!(r.value, "/");
        assert_eq!(r.rule, "root");
    }

    #[test]
    fn ci_without_repository_name_falls_back() {
        assert_eq!(resolve(&[("GITHUB_ACTIONS", "true")]).value, "/");
        assert_eq!(
            resolve(&[("GITHUB_ACTIONS", "true"), ("GITHUB_REPOSITORY", "owner")]).value,
            "/"
        );
        assert_eq!(
            resolve(&[("GITHUB_ACTIONS", "true"), ("GITHUB_REPOSITORY", "owner/")]).value,
            "/"
        );
    }

    #[test]
    fn ci_flag_false_is_unset() {
        let r = resolve(&[
            ("GITHUB_ACTIONS", "false"),
            ("GITHUB_REPOSITORY", "owner/myrepo"),
        ]);

        assert_eq!(r.value, "/");
    }

    #[test]
    fn every_combination_yields_slash_delimited_path() {
        let overrides = [None, Some(""), Some("/o/")];
        let flags = [None, Some(""), Some("true"), Some("0")];
        let repos = [None, Some(""), Some("owner"), Some("owner/r"), Some("a/b/c")];

        for o in overrides {
            for f in flags {
                for r in repos {
                    let mut vars = Vec::new();
                    if let Some(o) = o {
                        vars.push(("DOCS_BASE", o));
                    }
                    if let Some(f) = f {
                        vars.push(("GITHUB_ACTIONS", f));
                    }
                    if let Some(r) = r {
                        vars.push(("GITHUB_REPOSITORY", r));
                    }
                    let value = resolve(&vars).value;
                    assert!(!value.is_empty());
                    assert!(is_slash_delimited(&value), "{:?} -> {}", vars, value);
                    let inner = value.trim_matches('/');
                    assert!(!inner.contains('/'), "{:?} -> {}", vars, value);
                }
            }
        }
    }

    #[test]
    fn custom_variable_names() {
        let names = EnvNames {
            base_override: "SITE_BASE".to_string(),
            ci_flag: "CI".to_string(),
            repository: "REPO".to_string(),
        };
        let env: HashMap<String, String> = HashMap::from([
            ("CI".to_string(), "1".to_string()),
            ("REPO".to_string(), "me/tool".to_string()),
        ]);

        let r = BasePathResolver::default_rules(&names).resolve(&env);

        assert_eq!(r.value, "/tool/");
    }

    #[test]
    fn rules_are_ordered() {
        let resolver = BasePathResolver::default_rules(&EnvNames::default());

        assert_eq!(
            resolver.rule_names(),
            vec!["override", "ci-repository", "root"]
        );
    }

    #[test]
    fn custom_rules_still_fall_back_to_root() {
        let resolver = BasePathResolver::new(vec![ResolutionRule::new("never", |_| None)]);
        let env: HashMap<&str, &str> = HashMap::new();

        assert_eq!(resolver.resolve(&env).value, "/");
    }
}
