//! Output views of a [`ResultSet`].

mod ip;
mod json;
mod table;

use std::io::Write;

use anyhow::Result;
use enum_dispatch::enum_dispatch;
use strum::Display;
use strum::EnumString;

pub use self::ip::IpListRenderer;
pub use self::json::JsonRecord;
pub use self::json::JsonRenderer;
pub use self::table::TableRenderer;
pub use self::table::CELL_WIDTH;
use crate::query::ResultSet;

/// Renderers must implement [`Render`] to be selectable as an output format.
#[enum_dispatch]
pub trait Render {
    /// Writes the whole view of `results` to `out`.
    ///
    /// # Errors
    ///
    /// - If writing to `out` fails
    /// - If encoding fails
    fn render(&self, results: &ResultSet, out: &mut dyn Write) -> Result<()>;
}

#[enum_dispatch(Render)]
#[derive(Debug, Clone, Copy)]
pub enum RendererImpl {
    Table(TableRenderer),
    IpList(IpListRenderer),
    Json(JsonRenderer),
}

/// Output format selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    /// Aligned table, one column per name server.
    #[default]
    Std,
    /// One JSON record per name server, on a single line.
    Json,
    /// Only the union of all addresses, one per line.
    Ip,
}

impl Format {
    #[must_use]
    pub fn renderer(self) -> RendererImpl {
        match self {
            Self::Std => TableRenderer.into(),
            Self::Json => JsonRenderer.into(),
            Self::Ip => IpListRenderer.into(),
        }
    }
}
