//! Explore page: every listing, plus the connected wallet's token accounts.

use leptos::prelude::*;
use lib_solana::TokenAccountInfo;
use shared::{HomePanel, DIGITAL_PANEL_TITLE, REDEEMABLE_PANEL_TITLE};

use crate::components::NftPanel;
use crate::services::nfts::{get_non_redeemable_nft_list, get_redeemable_nft_list};
use crate::state::wallet::{use_wallet, WalletContext};

#[component]
pub fn ExplorePage() -> impl IntoView {
    let redeemable = HomePanel::with_limit(REDEEMABLE_PANEL_TITLE, get_redeemable_nft_list(), usize::MAX);
    let digital = HomePanel::with_limit(DIGITAL_PANEL_TITLE, get_non_redeemable_nft_list(), usize::MAX);

    view! {
        <div class="explore">
            <h1 class="homepage-title">"Explore marketplace"</h1>
            {use_wallet().ok().map(|wallet| view! { <MyTokens wallet=wallet/> })}
            <NftPanel panel=redeemable/>
            <NftPanel panel=digital/>
        </div>
    }
}

#[component]
fn MyTokens(wallet: WalletContext) -> impl IntoView {
    let (accounts, set_accounts) = signal(None::<Vec<TokenAccountInfo>>);
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let load = move |_: leptos::ev::MouseEvent| {
        set_loading.set(true);
        set_error.set(None);
        leptos::task::spawn_local(async move {
            match wallet.token_accounts().await {
                Ok(result) => set_accounts.set(Some(TokenAccountInfo::parse_all(&result))),
                Err(e) => {
                    log::error!("Failed to load token accounts: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <Show when=move || wallet.connected()>
            <section class="card" style="max-width: 1200px; margin: 0 auto 50px;">
                <button class="btn" disabled=move || loading.get() on:click=load>
                    {move || if loading.get() { "Loading..." } else { "Load my token accounts" }}
                </button>
                {move || error.get().map(|e| view! { <p class="error">{e}</p> })}
                {move || {
                    accounts
                        .get()
                        .map(|accounts| {
                            let nfts = accounts.iter().filter(|a| a.is_nft()).count();
                            view! {
                                <p>{format!("{} token accounts, {} NFTs", accounts.len(), nfts)}</p>
                                <ul>
                                    {accounts
                                        .into_iter()
                                        .map(|a| view! { <li>{format!("{}  {}", a.mint, a.ui_amount)}</li> })
                                        .collect_view()}
                                </ul>
                            }
                        })
                }}
            </section>
        </Show>
    }
}
