//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::jstring;
use jni::JNIEnv;

use crate::{layout_json, render_json_to_svg, Result};

fn call_with_options(env: &mut JNIEnv, options: &JString, f: fn(&str) -> Result<String>) -> jstring {
    let json: String = match env.get_string(options) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    match f(&json) {
        Ok(out) => match env.new_string(&out) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(e) => {
            log::warn!("JNI call rejected chart options: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Render JSON chart options to SVG.
///
/// Called from Kotlin as:
///   external fun renderJson(options: String): String?
#[no_mangle]
pub extern "system" fn Java_com_fretlib_app_FretLib_renderJson(
    mut env: JNIEnv,
    _class: JClass,
    options: JString,
) -> jstring {
    call_with_options(&mut env, &options, render_json_to_svg)
}

/// Lay out JSON chart options and return the drawing commands as JSON.
///
/// Called from Kotlin as:
///   external fun layoutJson(options: String): String?
#[no_mangle]
pub extern "system" fn Java_com_fretlib_app_FretLib_layoutJson(
    mut env: JNIEnv,
    _class: JClass,
    options: JString,
) -> jstring {
    call_with_options(&mut env, &options, layout_json)
}
