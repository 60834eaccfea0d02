//! COM bootstrap and thread-local UIA singletons.
//!
//! - `ensure_com_mta()` calls `CoInitializeEx(nullptr, COINIT_MULTITHREADED)` once per thread.
//! - `uia()` returns a thread-local `IUIAutomation` instance.
//! - `raw_walker()` returns a thread-local RawView `IUIAutomationTreeWalker`.
//! - `sentinels()` returns UIA's reserved mixed / not-supported values.
//!
//! Detail extraction runs on short-lived worker threads; every entry point
//! joins the MTA first so interface pointers stay valid across threads.

use crate::error::UiaError;
use std::cell::{Cell, RefCell};
use windows::Win32::System::Com::{CLSCTX_INPROC_SERVER, COINIT_MULTITHREADED, CoCreateInstance, CoInitializeEx};
use windows::Win32::UI::Accessibility::{CUIAutomation, IUIAutomation, IUIAutomationTreeWalker};
use windows::core::IUnknown;

/// UIA's reserved sentinel objects, compared by identity.
#[derive(Clone)]
pub struct Sentinels {
    pub not_supported: IUnknown,
    pub mixed: IUnknown,
}

thread_local! {
    static COM_INIT: Cell<bool> = const { Cell::new(false) };
    static UIA_SINGLETON: RefCell<Option<IUIAutomation>> = const { RefCell::new(None) };
    static RAW_WALKER: RefCell<Option<IUIAutomationTreeWalker>> = const { RefCell::new(None) };
    static SENTINELS: RefCell<Option<Sentinels>> = const { RefCell::new(None) };
}

pub fn ensure_com_mta() {
    COM_INIT.with(|flag| {
        if !flag.get() {
            unsafe {
                let _ = CoInitializeEx(None, COINIT_MULTITHREADED);
            }
            flag.set(true);
        }
    });
}

pub fn uia() -> Result<IUIAutomation, UiaError> {
    ensure_com_mta();
    UIA_SINGLETON.with(|cell| {
        if let Some(existing) = cell.borrow().as_ref() {
            return Ok(existing.clone());
        }
        let created: IUIAutomation = unsafe {
            CoCreateInstance(&CUIAutomation, None, CLSCTX_INPROC_SERVER)
                .map_err(|e| UiaError::ComInit(e.message().to_string()))?
        };
        *cell.borrow_mut() = Some(created.clone());
        Ok(created)
    })
}

pub fn raw_walker() -> Result<IUIAutomationTreeWalker, UiaError> {
    let uia = uia()?;
    RAW_WALKER.with(|cell| {
        if let Some(existing) = cell.borrow().as_ref() {
            return Ok(existing.clone());
        }
        let walker = unsafe { uia.RawViewWalker() }.map_err(|e| UiaError::api("IUIAutomation::RawViewWalker", &e))?;
        *cell.borrow_mut() = Some(walker.clone());
        Ok(walker)
    })
}

pub fn sentinels() -> Result<Sentinels, UiaError> {
    let uia = uia()?;
    SENTINELS.with(|cell| {
        if let Some(existing) = cell.borrow().as_ref() {
            return Ok(existing.clone());
        }
        let not_supported = unsafe { uia.ReservedNotSupportedValue() }
            .map_err(|e| UiaError::api("IUIAutomation::ReservedNotSupportedValue", &e))?;
        let mixed = unsafe { uia.ReservedMixedAttributeValue() }
            .map_err(|e| UiaError::api("IUIAutomation::ReservedMixedAttributeValue", &e))?;
        let sentinels = Sentinels { not_supported, mixed };
        *cell.borrow_mut() = Some(sentinels.clone());
        Ok(sentinels)
    })
}
