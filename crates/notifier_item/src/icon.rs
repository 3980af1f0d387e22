use crate::*;

/// Wire form of a list of pixmaps, `a(iiay)`.
pub(crate) type WirePixmaps = Vec<(i32, i32, Vec<u8>)>;

/// Wire form of a tooltip, `(sa(iiay)ss)`.
pub(crate) type WireTooltip = (String, WirePixmaps, String, String);

/// An icon, given by name (looked up in the icon theme by the host) and by pixmaps.
///
/// The pixmaps are the same image at different sizes, in the order given. Either may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Icon {
    pub name: String,
    pub pixmaps: Vec<Pixmap>,
}

impl Icon {
    pub fn new(name: impl Into<String>, pixmaps: Vec<Pixmap>) -> Self {
        Self { name: name.into(), pixmaps }
    }

    pub fn from_name(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    pub(crate) fn wire_pixmaps(&self) -> WirePixmaps {
        self.pixmaps.iter().map(Pixmap::to_wire).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tooltip {
    pub icon: Icon,
    pub title: String,
    pub text: String,
}

impl Tooltip {
    pub(crate) fn to_wire(&self) -> WireTooltip {
        (self.icon.name.clone(), self.icon.wire_pixmaps(), self.title.clone(), self.text.clone())
    }
}
