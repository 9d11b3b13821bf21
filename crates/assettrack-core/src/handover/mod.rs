//! Handover signing session state
//!
//! Pen capture and rendering belong to the signature widget; this module
//! owns what the chrome needs to know about a signing dialog: which strokes
//! exist per signer, clear/undo semantics, the acknowledgment flag, and
//! whether the session is ready to save.

use tracing::debug;

use crate::types::{HandoverSummary, SignerRole, Stroke};

/// Base URL for handover detail links, encoded into the dialog's QR code.
const HANDOVER_URL_BASE: &str = "https://assettrack.company.com/handover";

/// Recorded strokes for one signer.
#[derive(Debug, Clone, Default)]
pub struct SignaturePad {
    strokes: Vec<Stroke>,
}

impl SignaturePad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed stroke.
    pub fn record(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Remove every stroke.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Remove the most recent stroke. Returns whether anything was removed.
    pub fn undo(&mut self) -> bool {
        self.strokes.pop().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }
}

/// State of one handover signing dialog.
#[derive(Debug, Clone)]
pub struct SigningSession {
    summary: HandoverSummary,
    employee: SignaturePad,
    it_representative: SignaturePad,
    acknowledged: bool,
}

impl SigningSession {
    pub fn new(summary: HandoverSummary) -> Self {
        Self {
            summary,
            employee: SignaturePad::new(),
            it_representative: SignaturePad::new(),
            acknowledged: false,
        }
    }

    pub fn summary(&self) -> &HandoverSummary {
        &self.summary
    }

    pub fn pad(&self, role: SignerRole) -> &SignaturePad {
        match role {
            SignerRole::Employee => &self.employee,
            SignerRole::ItRepresentative => &self.it_representative,
        }
    }

    pub fn pad_mut(&mut self, role: SignerRole) -> &mut SignaturePad {
        match role {
            SignerRole::Employee => &mut self.employee,
            SignerRole::ItRepresentative => &mut self.it_representative,
        }
    }

    /// Employee confirmation of asset receipt.
    pub fn set_acknowledged(&mut self, acknowledged: bool) {
        debug!(
            "Handover {} acknowledgment: {}",
            self.summary.id, acknowledged
        );
        self.acknowledged = acknowledged;
    }

    pub fn acknowledged(&self) -> bool {
        self.acknowledged
    }

    /// Both signatures present and receipt acknowledged.
    pub fn is_complete(&self) -> bool {
        !self.employee.is_empty() && !self.it_representative.is_empty() && self.acknowledged
    }

    /// Link encoded into the dialog's QR code. Bitmap generation is the QR
    /// widget's job.
    pub fn qr_payload(&self) -> String {
        format!("{}/{}", HANDOVER_URL_BASE, self.summary.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn stroke(n: usize) -> Stroke {
        Stroke::new(vec![Point {
            x: n as f32,
            y: n as f32,
        }])
    }

    fn session() -> SigningSession {
        let date = chrono::NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        SigningSession::new(HandoverSummary::new(
            "HOV-2023-0065",
            "Sarah Johnson",
            "Marketing",
            date,
        ))
    }

    #[test]
    fn test_undo_removes_only_most_recent_stroke() {
        let mut session = session();
        let pad = session.pad_mut(SignerRole::Employee);
        pad.record(stroke(1));
        pad.record(stroke(2));

        assert!(pad.undo());
        assert_eq!(pad.strokes(), &[stroke(1)]);

        assert!(pad.undo());
        assert!(!pad.undo());
        assert!(pad.is_empty());
    }

    #[test]
    fn test_clear_empties_pad() {
        let mut session = session();
        let pad = session.pad_mut(SignerRole::ItRepresentative);
        pad.record(stroke(1));
        pad.record(stroke(2));

        pad.clear();
        assert!(pad.is_empty());
    }

    #[test]
    fn test_pads_are_independent() {
        let mut session = session();
        session.pad_mut(SignerRole::Employee).record(stroke(1));

        assert!(!session.pad(SignerRole::Employee).is_empty());
        assert!(session.pad(SignerRole::ItRepresentative).is_empty());
    }

    #[test]
    fn test_completeness_requires_both_signatures_and_acknowledgment() {
        let mut session = session();
        assert!(!session.is_complete());

        session.pad_mut(SignerRole::Employee).record(stroke(1));
        session
            .pad_mut(SignerRole::ItRepresentative)
            .record(stroke(2));
        assert!(!session.is_complete());

        session.set_acknowledged(true);
        assert!(session.is_complete());

        session.pad_mut(SignerRole::Employee).clear();
        assert!(!session.is_complete());
    }

    #[test]
    fn test_qr_payload() {
        let session = session();
        assert_eq!(
            session.qr_payload(),
            "https://assettrack.company.com/handover/HOV-2023-0065"
        );
    }
}
