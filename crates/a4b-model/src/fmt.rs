//! Single-line wire rendering shared by every model type.
//!
//! The service renders values as `{Field: value,Next: value}`: non-absent
//! fields only, declaration order, `: ` after the field name and a bare `,`
//! between fields. Each `Display` impl walks its fields through [`WireBody`]
//! so the format lives in one place.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// Incremental writer for the brace-delimited wire rendering.
pub(crate) struct WireBody<'a, 'b> {
    f: &'a mut Formatter<'b>,
    first: bool,
}

impl<'a, 'b> WireBody<'a, 'b> {
    /// Open the body and write the leading brace.
    pub(crate) fn begin(f: &'a mut Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(Self { f, first: true })
    }

    fn name(&mut self, name: &str) -> fmt::Result {
        if !self.first {
            self.f.write_str(",")?;
        }
        self.first = false;
        write!(self.f, "{name}: ")
    }

    /// Render a scalar or nested field if present.
    pub(crate) fn field<T: Display>(&mut self, name: &str, value: &Option<T>) -> fmt::Result {
        if let Some(v) = value {
            self.name(name)?;
            write!(self.f, "{v}")?;
        }
        Ok(())
    }

    /// Render a sequence field if present, as `[a, b]`.
    pub(crate) fn list<T: Display>(&mut self, name: &str, value: &Option<Vec<T>>) -> fmt::Result {
        if let Some(items) = value {
            self.name(name)?;
            self.f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    self.f.write_str(", ")?;
                }
                write!(self.f, "{item}")?;
            }
            self.f.write_str("]")?;
        }
        Ok(())
    }

    /// Render a mapping field if present, as `{k=v, k2=v2}` in key order.
    pub(crate) fn map(
        &mut self,
        name: &str,
        value: &Option<BTreeMap<String, String>>,
    ) -> fmt::Result {
        if let Some(entries) = value {
            self.name(name)?;
            self.f.write_str("{")?;
            for (i, (k, v)) in entries.iter().enumerate() {
                if i > 0 {
                    self.f.write_str(", ")?;
                }
                write!(self.f, "{k}={v}")?;
            }
            self.f.write_str("}")?;
        }
        Ok(())
    }

    /// Close the body.
    pub(crate) fn end(self) -> fmt::Result {
        self.f.write_str("}")
    }
}
