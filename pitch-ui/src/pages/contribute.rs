use crate::app::{StoreHandle, WalletHandle};
use leptos::*;
use project_store::contribute::{
    begin_contribution, settle, ContributionRequest, ContributionStatus, MOCK_SETTLE_DELAY,
};

#[component]
pub fn Contribute(id: String) -> impl IntoView {
    let store = expect_context::<StoreHandle>();
    let wallet = expect_context::<WalletHandle>();

    let Some(project) = store.get(&id) else {
        return view! { <div class="panel">"Project not found."</div> }.into_view();
    };

    let amount = create_rw_signal(String::new());
    let note = create_rw_signal(String::new());
    let status = create_rw_signal(None::<ContributionStatus>);

    let send = move |_| {
        let request = ContributionRequest {
            amount: amount.get_untracked(),
            note: note.get_untracked(),
        };
        let started = begin_contribution(&request);
        status.set(Some(started.clone()));
        if !started.is_rejected() {
            set_timeout(move || status.set(Some(settle(started))), MOCK_SETTLE_DELAY);
        }
    };

    view! {
      <section class="panel">
        <h1>{format!("Contribute to {}", project.name)}</h1>
        <p class="meta">"Send ALGO to support the project and receive project tokens per the developer's terms."</p>

        <div class="stack">
          <label class="field">
            <span>"Your wallet"</span>
            {move || match wallet.address() {
                Some(address) => view! { <code>{address}</code> }.into_view(),
                None => view! {
                  <span class="meta">"Not connected. Use the Connect Wallet button on the home page."</span>
                }
                .into_view(),
            }}
          </label>

          <label class="field">
            <span>"Amount (ALGO)"</span>
            <input
              type="number"
              min="0"
              step="0.1"
              prop:value=move || amount.get()
              on:input=move |ev| amount.set(event_target_value(&ev))
              placeholder="e.g., 10"
            />
          </label>

          <label class="field">
            <span>"Note (optional)"</span>
            <input
              prop:value=move || note.get()
              on:input=move |ev| note.set(event_target_value(&ev))
              placeholder="say thanks or add a memo"
            />
          </label>

          <button on:click=send>"Send Contribution"</button>

          <Show when=move || status.with(Option::is_some) fallback=|| ()>
            <div class="ok">{move || status.get().map(|s| s.message()).unwrap_or_default()}</div>
          </Show>
        </div>
      </section>
    }
    .into_view()
}
