//! Device-class detection used to pick the default choices.
//!
//! Search pages on small screens offer fewer page sizes. In a terminal the
//! "device" is the terminal window: anything narrower than
//! [`MOBILE_MAX_COLUMNS`] columns is treated as mobile-class.

use crate::Choice;

/// Terminals narrower than this many columns count as mobile-class.
pub const MOBILE_MAX_COLUMNS: u16 = 60;

/// Default choices on mobile-class devices.
pub const MOBILE_CHOICES: [Choice; 3] = [10, 25, 50];

/// Default choices everywhere else.
pub const DESKTOP_CHOICES: [Choice; 4] = [10, 25, 50, 100];

/// Answers whether the current device is mobile-class.
pub trait DeviceClass {
    /// Returns `true` for mobile-class devices.
    fn is_mobile_device(&self) -> bool;
}

/// A fixed device class, mostly useful in tests and for forcing a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Device {
    /// A desktop-class device.
    #[default]
    Desktop,
    /// A mobile-class device.
    Mobile,
}

impl DeviceClass for Device {
    fn is_mobile_device(&self) -> bool {
        matches!(self, Device::Mobile)
    }
}

/// Detects the device class from the size of the controlling terminal.
///
/// If the size cannot be queried (no tty), the device is desktop-class.
#[derive(Debug, Clone, Copy, Default)]
pub struct Terminal;

impl DeviceClass for Terminal {
    fn is_mobile_device(&self) -> bool {
        match crossterm::terminal::size() {
            Ok((columns, _)) => columns < MOBILE_MAX_COLUMNS,
            Err(err) => {
                tracing::trace!(%err, "terminal size unavailable, assuming desktop");
                false
            }
        }
    }
}

/// The default choice list for `device`.
pub fn default_choices(device: &dyn DeviceClass) -> Vec<Choice> {
    if device.is_mobile_device() {
        MOBILE_CHOICES.to_vec()
    } else {
        DESKTOP_CHOICES.to_vec()
    }
}
