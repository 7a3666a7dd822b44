//! # TUI Components
//!
//! All UI components for the terminal portfolio.
//!
//! ## Component Architecture
//!
//! Every component here is props-based: it receives all data as struct
//! fields, built fresh each frame from `NavigationState` and `Effects`, and
//! keeps nothing between draws.
//!
//! - `TitleBar`: Page title line (glitches in red)
//! - `NavBar`: One button per section; also owns the button hit test
//! - `LandingPage`: Headline, bobbing roster, key hints
//! - `ProfileView`: A turtle's page with animated stat bars
//! - `QuotePopup`: Centered overlay for the current quote
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into global
//! state. This makes dependencies explicit and components testable.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! NavBar::new(nav.slots(), tui.hovered).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! nav_bar.render(frame, area); // reads from a global
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Page title)
//! ├── nav_bar.rs       (Section buttons + hit testing)
//! ├── landing.rs       (Landing page)
//! ├── profile_view.rs  (Turtle profile)
//! └── quote_popup.rs   (Quote overlay)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod landing;
pub mod nav_bar;
pub mod profile_view;
pub mod quote_popup;
pub use landing::LandingPage;
pub use nav_bar::NavBar;
pub use profile_view::ProfileView;
pub use quote_popup::QuotePopup;
