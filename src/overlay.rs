/// Where a click inside a modal overlay landed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OverlayTarget {
    Backdrop,
    CloseControl,
    Panel,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct OverlayPolicy {
    pub backdrop_dismisses: bool,
}

impl OverlayPolicy {
    /// Lightbox style: backdrop and close control both dismiss.
    pub const LIGHTBOX: Self = Self {
        backdrop_dismisses: true,
    };

    /// Dialog style: only the close control dismisses.
    pub const DIALOG: Self = Self {
        backdrop_dismisses: false,
    };

    pub fn dismisses(self, target: OverlayTarget) -> bool {
        match target {
            OverlayTarget::CloseControl => true,
            OverlayTarget::Backdrop => self.backdrop_dismisses,
            OverlayTarget::Panel => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_clicks_never_dismiss() {
        assert!(!OverlayPolicy::LIGHTBOX.dismisses(OverlayTarget::Panel));
        assert!(!OverlayPolicy::DIALOG.dismisses(OverlayTarget::Panel));
    }

    #[test]
    fn backdrop_only_dismisses_lightboxes() {
        assert!(OverlayPolicy::LIGHTBOX.dismisses(OverlayTarget::Backdrop));
        assert!(!OverlayPolicy::DIALOG.dismisses(OverlayTarget::Backdrop));
        assert!(OverlayPolicy::DIALOG.dismisses(OverlayTarget::CloseControl));
    }
}
