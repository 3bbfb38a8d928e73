use crate::bridge::{self, LocalStorageSlot};
use crate::pages::{Contribute, CreateProject, Home, PitchDeck};
use crate::route::Route;
use leptos::*;
use project_store::wallet::{ManualWallet, WalletConnector};
use project_store::{MemorySlot, NewProject, Project, ProjectStore, StorageSlot, STORAGE_KEY};
use std::cell::RefCell;
use std::rc::Rc;

type UiSlot = Box<dyn StorageSlot>;

/// Shared access to the session store plus a reactive copy of its list.
#[derive(Clone)]
pub struct StoreHandle {
    store: Rc<RefCell<ProjectStore<UiSlot>>>,
    pub projects: RwSignal<Vec<Project>>,
    /// False when local storage is unavailable and the session is memory-only.
    pub persistent: bool,
}

impl StoreHandle {
    fn open() -> Self {
        let (slot, persistent): (UiSlot, bool) = match LocalStorageSlot::open(STORAGE_KEY) {
            Ok(slot) => (Box::new(slot), true),
            Err(e) => {
                tracing::warn!("local storage unavailable, projects will not persist: {e}");
                (Box::new(MemorySlot::new()), false)
            }
        };
        let store = ProjectStore::open(slot);
        let projects = create_rw_signal(store.list().to_vec());
        Self {
            store: Rc::new(RefCell::new(store)),
            projects,
            persistent,
        }
    }

    pub fn add(&self, new: NewProject) -> Result<String, String> {
        let id = self.store.borrow_mut().add(new).map_err(|e| e.to_string())?;
        self.projects.set(self.store.borrow().list().to_vec());
        Ok(id)
    }

    pub fn get(&self, id: &str) -> Option<Project> {
        self.projects.with(|ps| ps.iter().find(|p| p.id == id).cloned())
    }
}

#[derive(Clone, Copy)]
pub struct WalletHandle(pub RwSignal<ManualWallet>);

impl WalletHandle {
    pub fn address(&self) -> Option<String> {
        self.0.with(|w| w.active_address())
    }

    pub fn connect(&self, address: &str) {
        self.0.update(|w| w.connect(address));
    }

    pub fn disconnect(&self) {
        self.0.update(|w| w.disconnect());
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = StoreHandle::open();
    let persistent = store.persistent;
    provide_context(store);
    provide_context(WalletHandle(create_rw_signal(ManualWallet::default())));

    let route = create_rw_signal(bridge::current_route());
    let _ = window_event_listener(ev::hashchange, move |_| {
        let next = bridge::current_route();
        if next == Route::Home {
            bridge::navigate(&Route::Home);
        }
        route.set(next);
    });

    view! {
      <main class="shell">
        <nav class="row">
          <a href=Route::Home.hash()>"Projects"</a>
          <a href=Route::Create.hash()>"Create Project"</a>
        </nav>
        <Show when=move || !persistent fallback=|| ()>
          <div class="error">"Browser storage is unavailable. Projects you create will be lost when this tab closes."</div>
        </Show>
        {move || match route.get() {
            Route::Home => view! { <Home/> }.into_view(),
            Route::Create => view! { <CreateProject/> }.into_view(),
            Route::Project(id) => view! { <PitchDeck id=id/> }.into_view(),
            Route::Contribute(id) => view! { <Contribute id=id/> }.into_view(),
        }}
      </main>
    }
}
