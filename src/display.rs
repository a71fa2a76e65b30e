//! Startup instruction screen.

/// Minimal positioned-text display interface.
///
/// Implement this for the platform display. Prints may be buffered until
/// [`update`](TextDisplay::update) flushes them to the panel.
pub trait TextDisplay {
    /// Print `text` with its top-left corner at (`x`, `y`)
    fn print(&mut self, text: &str, x: u16, y: u16);
    /// Flush pending prints to the panel
    fn update(&mut self);
}

/// Draw the static button legend and flush.
///
/// Called once at startup with a short-lived handle; the display can be
/// closed again as soon as this returns, nothing holds it across ticks.
pub fn draw_instructions<D: TextDisplay>(display: &mut D) {
    display.print("COLOR >", 50, 40);
    display.print("INDICATE >", 10, 0);
    display.print("< SYNC BEAT", 0, 60);
    display.update();
}
