//! Home page: header plus the first three redeemable and digital NFTs.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use shared::home_panels;

use crate::components::NftPanel;
use crate::services::nfts::{get_non_redeemable_nft_list, get_redeemable_nft_list};

#[component]
fn HomePageHeader() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <h1 class="homepage-title">"The marketplace for redeemable NFTs"</h1>
        <h2 class="homepage-subtitle">"Spend crypto on real life products"</h2>
        <div style="display: flex; justify-content: center; padding-top: 20px;">
            <button
                class="btn btn-explore-marketplace"
                on:click=move |_| navigate("/explore", NavigateOptions::default())
            >
                "Explore marketplace"
            </button>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let [redeemable, digital] = home_panels(get_redeemable_nft_list(), get_non_redeemable_nft_list());

    view! {
        <div class="homepage" style="background-image: url(/assets/homepage/waves.svg); background-position: center; background-repeat: no-repeat; background-size: cover;">
            <HomePageHeader/>
            <div style="padding-top: 100px;">
                <NftPanel panel=redeemable/>
            </div>
            <NftPanel panel=digital/>
        </div>
    }
}
