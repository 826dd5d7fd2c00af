use poshujan_shared::session::{SESSION_FLAG_KEY, SESSION_FLAG_VALUE};

/// Where the login flag survives page reloads.
pub trait FlagStore {
    fn read(&self) -> Option<String>;
    fn set(&mut self) -> Result<(), String>;
    fn clear(&mut self) -> Result<(), String>;
}

/// `window.localStorage`, under [`SESSION_FLAG_KEY`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageFlag;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl FlagStore for LocalStorageFlag {
    fn read(&self) -> Option<String> {
        local_storage()?.get_item(SESSION_FLAG_KEY).ok().flatten()
    }

    fn set(&mut self) -> Result<(), String> {
        local_storage()
            .ok_or("localStorage unavailable")?
            .set_item(SESSION_FLAG_KEY, SESSION_FLAG_VALUE)
            .map_err(|_| "Could not write the session flag".to_string())
    }

    fn clear(&mut self) -> Result<(), String> {
        local_storage()
            .ok_or("localStorage unavailable")?
            .remove_item(SESSION_FLAG_KEY)
            .map_err(|_| "Could not remove the session flag".to_string())
    }
}

/// In-memory store for exercising the session logic off-browser.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryFlag {
    pub value: Option<String>,
}

#[cfg(test)]
impl FlagStore for MemoryFlag {
    fn read(&self) -> Option<String> {
        self.value.clone()
    }

    fn set(&mut self) -> Result<(), String> {
        self.value = Some(SESSION_FLAG_VALUE.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), String> {
        self.value = None;
        Ok(())
    }
}

/// Store whose writes always fail, holding whatever value it started with.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct ReadOnlyFlag {
    pub value: Option<String>,
}

#[cfg(test)]
impl FlagStore for ReadOnlyFlag {
    fn read(&self) -> Option<String> {
        self.value.clone()
    }

    fn set(&mut self) -> Result<(), String> {
        Err("storage is read-only".to_string())
    }

    fn clear(&mut self) -> Result<(), String> {
        Err("storage is read-only".to_string())
    }
}
