//! Navbar and footer as handed to the renderer.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::config::{
    ConfigError, FooterConfig, FooterStyle, NavPosition, NavbarConfig, NavbarLogoConfig,
    TargetRef,
};

/// Where a navbar item points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// First doc of a sidebar.
    DocSidebar { sidebar_id: String },
    /// Site route.
    Internal { to: String },
    /// Absolute URL.
    External { href: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarItem {
    pub label: String,
    pub position: NavPosition,
    pub target: NavTarget,
}

impl Serialize for NavbarItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match &self.target {
            NavTarget::DocSidebar { sidebar_id } => {
                map.serialize_entry("type", "docSidebar")?;
                map.serialize_entry("sidebarId", sidebar_id)?;
            }
            NavTarget::Internal { to } => map.serialize_entry("to", to)?,
            NavTarget::External { href } => map.serialize_entry("href", href)?,
        }
        map.serialize_entry("label", &self.label)?;
        map.serialize_entry("position", &self.position)?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarLogo {
    pub alt: String,
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_dark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navbar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<NavbarLogo>,
    pub items: Vec<NavbarItem>,
}

/// Footer link target: `{ "to": .. }` or `{ "href": .. }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterTarget {
    To(String),
    Href(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub label: String,
    #[serde(flatten)]
    pub target: FooterTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterGroup {
    pub title: String,
    pub items: Vec<FooterLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub style: FooterStyle,
    pub links: Vec<FooterGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// Target selection already passed validation; a failure here means
/// the config was not validated.
fn unvalidated(field: String, message: String) -> ConfigError {
    ConfigError::Validation(format!("{}: {}", field, message))
}

impl Navbar {
    pub fn resolve(config: &NavbarConfig) -> Result<Self, ConfigError> {
        let items = config
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let target = match item.target() {
                    Ok(TargetRef::Sidebar(id)) => NavTarget::DocSidebar {
                        sidebar_id: id.to_string(),
                    },
                    Ok(TargetRef::Internal(to)) => NavTarget::Internal { to: to.to_string() },
                    Ok(TargetRef::External(href)) => NavTarget::External {
                        href: href.to_string(),
                    },
                    Err(message) => return Err(unvalidated(format!("navbar.items[{}]", i), message)),
                };
                Ok(NavbarItem {
                    label: item.label.clone(),
                    position: item.position,
                    target,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            title: config.title.clone(),
            logo: config.logo.as_ref().map(NavbarLogo::from),
            items,
        })
    }
}

impl From<&NavbarLogoConfig> for NavbarLogo {
    fn from(logo: &NavbarLogoConfig) -> Self {
        Self {
            alt: logo.alt.clone(),
            src: logo.src.clone(),
            src_dark: logo.src_dark.clone(),
            href: logo.href.clone(),
        }
    }
}

impl Footer {
    pub fn resolve(config: &FooterConfig) -> Result<Self, ConfigError> {
        let mut links = Vec::with_capacity(config.links.len());
        for (i, group) in config.links.iter().enumerate() {
            let mut items = Vec::with_capacity(group.items.len());
            for (j, item) in group.items.iter().enumerate() {
                let target = match item.target() {
                    Ok(TargetRef::Internal(to)) => FooterTarget::To(to.to_string()),
                    Ok(TargetRef::External(href)) => FooterTarget::Href(href.to_string()),
                    Ok(TargetRef::Sidebar(_)) => {
                        return Err(unvalidated(
                            format!("footer.links[{}].items[{}]", i, j),
                            "footer items cannot target a sidebar".to_string(),
                        ));
                    }
                    Err(message) => {
                        return Err(unvalidated(
                            format!("footer.links[{}].items[{}]", i, j),
                            message,
                        ));
                    }
                };
                items.push(FooterLink {
                    label: item.label.clone(),
                    target,
                });
            }
            links.push(FooterGroup {
                title: group.title.clone(),
                items,
            });
        }

        Ok(Self {
            style: config.style,
            links,
            copyright: config.copyright.clone(),
        })
    }
}
