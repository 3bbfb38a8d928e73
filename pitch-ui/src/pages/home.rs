use crate::app::{StoreHandle, WalletHandle};
use crate::route::Route;
use leptos::*;
use project_store::ProjectQuery;

#[component]
pub fn Home() -> impl IntoView {
    let store = expect_context::<StoreHandle>();
    let wallet = expect_context::<WalletHandle>();
    let search = create_rw_signal(String::new());
    let address_input = create_rw_signal(String::new());

    let visible = move || {
        let query = ProjectQuery {
            q: Some(search.get()),
            ..ProjectQuery::default()
        };
        store
            .projects
            .get()
            .into_iter()
            .filter(|p| query.matches(p))
            .collect::<Vec<_>>()
    };

    view! {
      <section class="panel">
        <h1>"Back the next wave of builders"</h1>

        <div class="row">
          <Show
            when=move || wallet.address().is_some()
            fallback=move || view! {
              <input
                prop:value=move || address_input.get()
                on:input=move |ev| address_input.set(event_target_value(&ev))
                placeholder="Wallet address"
              />
              <button on:click=move |_| wallet.connect(&address_input.get_untracked())>"Connect Wallet"</button>
            }
          >
            <code>{move || wallet.address().unwrap_or_default()}</code>
            <button on:click=move |_| wallet.disconnect()>"Disconnect"</button>
          </Show>
        </div>

        <input
          prop:value=move || search.get()
          on:input=move |ev| search.set(event_target_value(&ev))
          placeholder="Search projects"
        />

        <ul class="cards">
          <For
            each=visible
            key=|p| p.id.clone()
            children=move |p| view! {
              <li class="card">
                <img class="logo" src=p.logo_data_url.clone() alt="logo"/>
                <div>
                  <a href=Route::Project(p.id.clone()).hash()><b>{p.name.clone()}</b></a>
                  <span class="meta">{format!(" ({})", p.category)}</span>
                </div>
                <div>{p.purpose.clone()}</div>
              </li>
            }
          />
        </ul>
      </section>
    }
}
