use yew::prelude::*;

use crate::catalog::WEBSITES;
use crate::components::cards::WebsiteCard;

#[function_component(Websites)]
pub fn websites() -> Html {
    html! {
        <div class="list-page">
            <section class="page-hero">
                <h1>{"Websites"}</h1>
                <p>{"Marketing sites I designed and built for small businesses and friends."}</p>
            </section>
            <div class="card-grid">
                { for WEBSITES.iter().map(|site| html! { <WebsiteCard site={*site} /> }) }
            </div>
        </div>
    }
}
