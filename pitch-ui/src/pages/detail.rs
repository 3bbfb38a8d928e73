use crate::app::StoreHandle;
use crate::route::Route;
use leptos::*;

#[component]
fn InfoBlock(label: &'static str, value: String) -> impl IntoView {
    view! {
      <div class="info">
        <h3>{label}</h3>
        <p>{value}</p>
      </div>
    }
}

#[component]
pub fn PitchDeck(id: String) -> impl IntoView {
    let store = expect_context::<StoreHandle>();

    let Some(p) = store.get(&id) else {
        return view! { <div class="panel">"Project not found."</div> }.into_view();
    };

    let links = p.link_list();
    view! {
      <article class="panel">
        <img class="banner" src=p.image_data_url.clone() alt="banner"/>
        <div class="row">
          <img class="logo" src=p.logo_data_url.clone() alt="logo"/>
          <div>
            <h1>{p.name.clone()}</h1>
            <span class="meta">{p.category.clone()}</span>
          </div>
          <a class="button" href=Route::Contribute(p.id.clone()).hash()>"Contribute"</a>
        </div>

        <p>{p.purpose.clone()}</p>
        <InfoBlock label="Problem" value=p.problem.clone()/>
        <InfoBlock label="Solution" value=p.solution.clone()/>
        <InfoBlock label="Target market" value=p.target_market.clone()/>
        <InfoBlock label="Business model" value=p.business_model.clone()/>
        <InfoBlock label="Team" value=p.team.clone()/>
        <InfoBlock label="Contact" value=p.contact.clone()/>

        <div class="info">
          <h3>"Links"</h3>
          {if links.is_empty() {
              view! { <p class="meta">"—"</p> }.into_view()
          } else {
              view! {
                <ul>
                  {links
                      .into_iter()
                      .map(|href| view! {
                        <li><a href=href.clone() target="_blank" rel="noreferrer">{href.clone()}</a></li>
                      })
                      .collect_view()}
                </ul>
              }
              .into_view()
          }}
        </div>

        <p class="meta">{format!("Created {}", p.created_at.format("%Y-%m-%d %H:%M UTC"))}</p>
      </article>
    }
    .into_view()
}
