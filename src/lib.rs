//! fretlib — chord diagram and fretboard chart rendering.
//!
//! A diagram is described by a string count, a fret count, a fingering
//! (fretted notes, barres, open and muted strings), and optionally a tuning
//! for printing note names. The library lays the diagram out on a grid and
//! renders it as SVG.
//!
//! # Example
//! ```no_run
//! use fretlib::render_json_to_svg;
//!
//! let svg = render_json_to_svg(r#"{
//!     "fingering": [
//!         { "string": 1, "fret": 0 },
//!         { "string": 2, "fret": 1, "finger": 1 },
//!         { "string": 3, "fret": 0 },
//!         { "string": 4, "fret": 2, "finger": 2 },
//!         { "string": 5, "fret": 3, "finger": 3 },
//!         { "string": 6, "fret": -1 }
//!     ]
//! }"#).unwrap();
//! println!("{svg}");
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod pitch;
pub mod renderer;

#[cfg(target_os = "android")]
pub mod android;

pub use config::{parse_options_json, FretboardOptions};
pub use error::{FretboardError, Result};
pub use model::*;
pub use pitch::{NoteSpeller, Pitch, PitchSpeller};
pub use renderer::{
    layout_fretboard, layout_fretboard_with, render_diagram_to_svg, render_fretboard_to_svg, Diagram,
    DrawCommand,
};

/// Parse JSON options, resolve them against the defaults, and render SVG.
pub fn render_json_to_svg(json: &str) -> Result<String> {
    let config = FretboardConfig::from_json(json)?;
    render_fretboard_to_svg(&config)
}

/// Convert a laid-out diagram to a JSON string.
/// Useful for hosts that draw the commands with a native canvas.
pub fn diagram_to_json(diagram: &Diagram) -> Result<String> {
    Ok(serde_json::to_string_pretty(diagram)?)
}

/// Parse JSON options and return the laid-out diagram as JSON.
pub fn layout_json(json: &str) -> Result<String> {
    let config = FretboardConfig::from_json(json)?;
    diagram_to_json(&layout_fretboard(&config)?)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Render JSON chart options to SVG and return it as a C string.
/// Returns null when the options are invalid.
/// The caller must free the returned string with `fretlib_free_string`.
///
/// # Safety
/// `options` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn fretlib_render_json(options: *const c_char) -> *mut c_char {
    if options.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(options) };
    let json = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    match render_json_to_svg(json) {
        Ok(svg) => CString::new(svg).unwrap_or_default().into_raw(),
        Err(e) => {
            log::warn!("fretlib_render_json: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Lay out JSON chart options and return the drawing commands as a JSON C
/// string. Returns null when the options are invalid.
/// The caller must free the returned string with `fretlib_free_string`.
///
/// # Safety
/// `options` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn fretlib_layout_json(options: *const c_char) -> *mut c_char {
    if options.is_null() {
        return std::ptr::null_mut();
    }
    let json = match unsafe { CStr::from_ptr(options) }.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    match layout_json(json) {
        Ok(out) => CString::new(out).unwrap_or_default().into_raw(),
        Err(e) => {
            log::warn!("fretlib_layout_json: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Free a string previously returned by fretlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a fretlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn fretlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ffi_round_trip() {
        let options = CString::new(r#"{ "fingering": [ { "string": 1, "fret": 3, "finger": 3 } ] }"#).unwrap();
        let out = unsafe { fretlib_render_json(options.as_ptr()) };
        assert!(!out.is_null());
        let svg = unsafe { CStr::from_ptr(out) }.to_str().unwrap().to_string();
        unsafe { fretlib_free_string(out) };
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn ffi_returns_null_for_invalid_options() {
        let options = CString::new(r#"{ "fingering": [ { "string": 9, "fret": 3 } ] }"#).unwrap();
        assert!(unsafe { fretlib_render_json(options.as_ptr()) }.is_null());
        assert!(unsafe { fretlib_render_json(std::ptr::null()) }.is_null());
        assert!(unsafe { fretlib_layout_json(std::ptr::null()) }.is_null());
    }

    #[test]
    fn ffi_returns_null_for_oversized_boards() {
        for json in [
            r#"{ "frets": 18446744073709551615 }"#,
            r#"{ "strings": 18446744073709551615 }"#,
            r#"{ "strings": 100000000 }"#,
        ] {
            let options = CString::new(json).unwrap();
            assert!(unsafe { fretlib_render_json(options.as_ptr()) }.is_null(), "{json}");
            assert!(unsafe { fretlib_layout_json(options.as_ptr()) }.is_null(), "{json}");
        }
        assert!(matches!(
            layout_json(r#"{ "frets": 18446744073709551615 }"#),
            Err(FretboardError::InvalidConfig(_))
        ));
    }

    #[test]
    fn layout_json_lists_layers() {
        let json = layout_json(r#"{ "showFretLabels": true }"#).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["first_fret"], 1);
        assert_eq!(value["layers"][0]["id"], "grid");
        assert_eq!(value["layers"][1]["commands"][0]["kind"], "text");
        assert_eq!(value["layers"][1]["commands"][0]["content"], "1");
    }
}
