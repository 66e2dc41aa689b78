//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docsite.toml`:
//!
//! | Module    | TOML Section                     | Purpose                          |
//! |-----------|----------------------------------|----------------------------------|
//! | `site`    | `[site]`                         | Title, tagline, URL, base path   |
//! | `i18n`    | `[i18n]`                         | Locale set and per-locale config |
//! | `links`   | `[links]`                        | Broken link policies             |
//! | `navbar`  | `[navbar]`                       | Top navigation bar               |
//! | `footer`  | `[footer]`                       | Footer link groups               |
//! | `theme`   | `[theme]`                        | Custom CSS, prism themes         |
//! | `content` | `[docs]`, `[blog]`, `[pages]`    | Content directories and routes   |
//! | `target`  | -                                | Link targets of navbar/footer    |

mod content;
mod footer;
mod i18n;
mod links;
mod navbar;
mod site;
mod target;
mod theme;

pub use content::{BlogConfig, DocsConfig, PagesConfig};
pub use footer::{FooterConfig, FooterStyle};
pub use i18n::{Direction, I18nConfig};
pub use links::{BrokenLinkPolicy, LinksConfig};
pub use navbar::{NavPosition, NavbarConfig, NavbarLogoConfig};
pub use site::SiteInfoConfig;
pub use target::TargetRef;
pub use theme::ThemeSectionConfig;
