//! formflow - a flow-layout form container for ratatui
//!
//! Arranges focusable elements vertically (full-width rows sharing a label
//! column) or horizontally (wrapping flow), cycles keyboard focus between
//! them, keeps the focused element scrolled into view, and routes keyboard
//! and mouse events to whichever element holds focus.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                     FormContainer                      │
//! │   (item list, delegation, input routing, draw order)   │
//! └────────────────────────────────────────────────────────┘
//!         │               │                │
//!         ▼               ▼                ▼
//!   layout::compute   FocusCycle   scroll::vertical_offset
//!         │
//!         ▼
//!   Box<dyn FormElement>  (TextField, TextView, Checkbox, Button, Tree,
//!                          or anything else satisfying the contract)
//! ```
//!
//! Focus uses two levels of indirection: the [`focus::FocusCycle`] tracks
//! the *intended* target index, and delegation confirms which element
//! actually accepted focus. Elements that refuse (display-only views)
//! signal a no-key finish, which replays the last navigation key - the
//! cycle skips them without any special-casing.
//!
//! The container is single-threaded and synchronous: every layout pass,
//! focus transition, and routed event runs to completion inside the calling
//! draw or input-dispatch call.
//!
//! # Example
//!
//! ```no_run
//! use formflow::{FormContainer, Orientation};
//!
//! let mut form = FormContainer::new();
//! form.add_text_field("Name", "")
//!     .add_text_view("Notes", "read-only help text", 0, 3, false)
//!     .add_checkbox("Subscribe", false)
//!     .add_button("Save", || println!("saved"));
//! form.set_orientation(Orientation::Vertical);
//! form.focus();
//! // In the owning event loop:
//! //   terminal.draw(|f| form.draw(f, f.area()))?;
//! //   form.handle_key(key_event);
//! //   form.handle_mouse(mouse_event);
//! ```

pub mod element;
pub mod elements;
pub mod focus;
pub mod form;
pub mod layout;
pub mod scroll;

pub use element::{FinishKey, FinishedHook, FormElement, Handled};
pub use elements::{Button, Checkbox, TextField, TextView, Tree, TreeNode};
pub use form::FormContainer;
pub use layout::{LayoutConfig, Orientation, DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH};
