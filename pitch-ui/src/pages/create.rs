use crate::app::StoreHandle;
use crate::bridge;
use crate::route::Route;
use leptos::*;
use pitch_registry::{clean_draft, validate_draft, DraftRules, PitchDraftV1};
use project_store::NewProject;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

fn text_field(
    draft: RwSignal<PitchDraftV1>,
    label: &'static str,
    get: fn(&PitchDraftV1) -> &String,
    set: fn(&mut PitchDraftV1, String),
    rows: Option<u32>,
) -> impl IntoView {
    let value = move || draft.with(|d| get(d).clone());
    let on_input = move |ev: web_sys::Event| {
        let v = event_target_value(&ev);
        draft.update(|d| set(d, v));
    };

    let input = match rows {
        Some(rows) => view! { <textarea rows=rows prop:value=value on:input=on_input/> }.into_view(),
        None => view! { <input prop:value=value on:input=on_input/> }.into_view(),
    };
    view! {
      <label class="field">
        <span>{label}</span>
        {input}
      </label>
    }
}

fn image_field(
    label: &'static str,
    target: RwSignal<Option<String>>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        spawn_local(async move {
            match bridge::read_file_data_url(&file).await {
                Ok(url) => target.set(Some(url)),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
      <label class="field">
        <span>{label}</span>
        <input type="file" accept="image/*" on:change=on_change/>
        <Show when=move || target.with(Option::is_some) fallback=|| ()>
          <img class="preview" src=move || target.get() alt="preview"/>
        </Show>
      </label>
    }
}

#[component]
pub fn CreateProject() -> impl IntoView {
    let store = expect_context::<StoreHandle>();
    let draft = create_rw_signal(PitchDraftV1 {
        schema: pitch_registry::DRAFT_SCHEMA.into(),
        ..PitchDraftV1::default()
    });
    let logo = create_rw_signal(None::<String>);
    let image = create_rw_signal(None::<String>);
    let error = create_rw_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let mut submitted = draft.get_untracked();
        submitted.logo_data_url = logo.get_untracked();
        submitted.image_data_url = image.get_untracked();

        let cleaned = clean_draft(submitted);
        if let Err(e) = validate_draft(&cleaned, &DraftRules::default()) {
            error.set(Some(e.to_string()));
            return;
        }
        match store.add(NewProject::from(cleaned)) {
            Ok(id) => bridge::navigate(&Route::Project(id)),
            Err(e) => error.set(Some(format!("Could not save project: {e}"))),
        }
    };

    view! {
      <section class="panel">
        <h1>"Create Project"</h1>
        <form class="stack" on:submit=on_submit>
          {text_field(draft, "Project name", |d| &d.name, |d, v| d.name = v, None)}
          {text_field(draft, "Category", |d| &d.category, |d, v| d.category = v, None)}
          {text_field(draft, "Purpose (short blurb)", |d| &d.purpose, |d, v| d.purpose = v, None)}
          {text_field(draft, "Problem", |d| &d.problem, |d, v| d.problem = v, Some(4))}
          {text_field(draft, "Solution", |d| &d.solution, |d, v| d.solution = v, Some(4))}
          {text_field(draft, "Target market", |d| &d.target_market, |d, v| d.target_market = v, Some(3))}
          {text_field(draft, "Business model", |d| &d.business_model, |d, v| d.business_model = v, Some(3))}
          {text_field(draft, "Team", |d| &d.team, |d, v| d.team = v, Some(4))}
          {text_field(draft, "Contact info", |d| &d.contact, |d, v| d.contact = v, None)}
          {text_field(draft, "Relevant links (comma or newline separated)", |d| &d.links, |d, v| d.links = v, Some(2))}
          {image_field("Logo (optional)", logo, error)}
          {image_field("Project image (optional)", image, error)}

          <Show when=move || error.with(Option::is_some) fallback=|| ()>
            <pre class="error">{move || error.get().unwrap_or_default()}</pre>
          </Show>

          <div class="row">
            <button type="submit">"Publish"</button>
            <a class="button" href=Route::Home.hash()>"Cancel"</a>
          </div>
        </form>
      </section>
    }
}
