use crate::*;

/// The change notifications of the item interface. Every [`PropertyUpdate`] maps to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
pub enum ChangeSignal {
    NewTitle,
    NewIcon,
    NewAttentionIcon,
    NewOverlayIcon,
    NewToolTip,
    /// Carries the new status as its argument.
    NewStatus(Status),
}

impl From<&PropertyUpdate> for ChangeSignal {
    fn from(update: &PropertyUpdate) -> Self {
        match update {
            PropertyUpdate::Title(_) => ChangeSignal::NewTitle,
            PropertyUpdate::Status(status) => ChangeSignal::NewStatus(*status),
            PropertyUpdate::Icon(_) => ChangeSignal::NewIcon,
            PropertyUpdate::OverlayIcon(_) => ChangeSignal::NewOverlayIcon,
            PropertyUpdate::AttentionIcon(_) => ChangeSignal::NewAttentionIcon,
            PropertyUpdate::ToolTip(_) => ChangeSignal::NewToolTip,
        }
    }
}
