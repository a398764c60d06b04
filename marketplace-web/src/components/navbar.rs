//! Navigation bar: network and wallet provider pickers, connect button.

use leptos::prelude::*;
use leptos_router::components::A;
use lib_solana::Network;
use lib_wallet::WALLET_PROVIDERS;
use shared::Notification;

use crate::state::connection::use_connection;
use crate::state::notifications::use_notifications;
use crate::state::wallet::use_wallet;

#[component]
pub fn Navbar() -> impl IntoView {
    let wallet = match use_wallet() {
        Ok(wallet) => wallet,
        Err(e) => {
            log::error!("{}", e);
            return view! { <nav><span class="error">{e.to_string()}</span></nav> }.into_any();
        }
    };
    let connection = use_connection();
    let notifications = use_notifications();

    let on_network = move |ev: leptos::ev::Event| match event_target_value(&ev).parse::<Network>() {
        Ok(network) => connection.set_endpoint(network.endpoint()),
        Err(e) => log::warn!("{}", e),
    };
    let on_provider = move |ev: leptos::ev::Event| wallet.set_provider(event_target_value(&ev));
    let on_toggle = move |_: leptos::ev::MouseEvent| {
        if wallet.connected() {
            wallet.disconnect();
        } else if let Err(e) = wallet.connect() {
            log::error!("Wallet connection failed: {}", e);
            notifications.push(Notification::new("Wallet update", e.to_string()));
        }
    };

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; gap: 16px; align-items: center;">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">"Redeem Market"</span>
                </A>
                <A href="/explore" attr:class="nav-link-clean">"Explore"</A>
                <div style="flex: 1;"></div>
                <select class="nav-select" on:change=on_network>
                    {Network::ALL
                        .into_iter()
                        .map(|network| {
                            let selected = move || connection.network() == Some(network);
                            view! { <option value=network.name() selected=selected>{network.name()}</option> }
                        })
                        .collect_view()}
                </select>
                <select class="nav-select" title=move || wallet.provider_name() on:change=on_provider>
                    {WALLET_PROVIDERS
                        .iter()
                        .map(|provider| {
                            let url = provider.url;
                            let selected = move || wallet.provider_url() == url;
                            view! { <option value=url selected=selected>{provider.name}</option> }
                        })
                        .collect_view()}
                </select>
                {move || wallet.display_key().map(|key| view! { <span class="wallet-key">{key}</span> })}
                <button class="btn" on:click=on_toggle>
                    {move || if wallet.connected() { "Disconnect" } else { "Connect wallet" }}
                </button>
            </div>
        </nav>
    }
    .into_any()
}
