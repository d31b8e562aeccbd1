//! Sidebar navigation
//!
//! Links go through `leptos_router`, so switching pages never reloads the
//! document.

use contracts::routing::PageId;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    href: &'static str,
    label: &'static str,
}

fn get_menu_items() -> Vec<MenuItem> {
    PageId::DASHBOARDS
        .into_iter()
        .filter_map(|page| {
            page.path().map(|href| MenuItem {
                href,
                label: page.title(),
            })
        })
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <ul class="sidebar__menu">
                {get_menu_items()
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li class="sidebar__item">
                                <A href=item.href>{item.label}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_every_dashboard() {
        let hrefs: Vec<&str> = get_menu_items().iter().map(|i| i.href).collect();
        assert_eq!(hrefs, vec!["/sales", "/orders", "/stocks", "/incomes"]);
    }
}
