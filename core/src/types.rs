/// Number shown on a panel, also the position it must be clicked in.
pub type Label = u8;

/// Display-order position of a panel on the board.
pub type PanelIndex = usize;

/// Number of panels on the board, fixed for the lifetime of the program.
pub const PANEL_COUNT: usize = 4;

/// Expected number once every panel has been solved.
pub const TERMINAL_LABEL: Label = PANEL_COUNT as Label;

/// Whether `labels` holds every label in `0..PANEL_COUNT` exactly once.
pub fn is_permutation(labels: &[Label]) -> bool {
    if labels.len() != PANEL_COUNT {
        return false;
    }

    let mut seen = [false; PANEL_COUNT];
    for &label in labels {
        match seen.get_mut(usize::from(label)) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}
