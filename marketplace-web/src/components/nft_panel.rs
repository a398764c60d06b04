//! NFT cards and titled panels.

use leptos::prelude::*;
use shared::{HomePanel, NftDescriptor};

#[component]
pub fn NftCard(nft: NftDescriptor) -> impl IntoView {
    let price = nft.price.map(|p| format!("{p:.2} USDC"));
    let badge = nft.redeemable.then_some("Redeemable");

    view! {
        <div class="card nft-card" style="width: 240px; margin: 12px;">
            <img src=nft.image alt=nft.name.clone() style="width: 100%; border-radius: 8px;"/>
            <h3 style="margin: 12px 0 4px;">{nft.name}</h3>
            <p style="opacity: 0.8;">{nft.description}</p>
            {price.map(|p| view! { <span class="nft-price">{p}</span> })}
            {badge.map(|b| view! { <span class="nft-badge" style="margin-left: 8px;">{b}</span> })}
        </div>
    }
}

/// A titled row of NFT cards. An empty panel still shows its title.
#[component]
pub fn NftPanel(panel: HomePanel) -> impl IntoView {
    let empty = panel.is_empty();

    view! {
        <section class="nft-panel" style="max-width: 1200px; margin: 0 auto 50px;">
            <h2 class="nft-panel-title">{panel.title}</h2>
            <div style="display: flex; flex-wrap: wrap; justify-content: center;">
                {panel.items.into_iter().map(|nft| view! { <NftCard nft=nft/> }).collect_view()}
            </div>
            <Show when=move || empty>
                <p style="text-align: center; opacity: 0.6;">"Nothing listed yet"</p>
            </Show>
        </section>
    }
}
