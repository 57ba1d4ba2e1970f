use contracts::dashboards::d410_sales_overview::SalesTransaction;
use leptos::prelude::*;

use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_amount, format_quantity};

const SKELETON_ROWS: usize = 10;

#[component]
pub fn SalesTable(
    #[prop(into)] transactions: Signal<Vec<SalesTransaction>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let body = move || {
        if loading.get() {
            return (0..SKELETON_ROWS)
                .map(|_| view! { <div class="table__skeleton-row"></div> })
                .collect_view()
                .into_any();
        }

        let rows = transactions.get();
        if rows.is_empty() {
            return view! {
                <div class="table__empty">
                    <p class="table__empty-title">"No transactions found"</p>
                    <p>"Try adjusting your search or filter criteria."</p>
                </div>
            }
            .into_any();
        }

        view! {
            <table class="table__data">
                <thead>
                    <tr>
                        <th>"Transaction ID"</th>
                        <th>"Date"</th>
                        <th>"Customer ID"</th>
                        <th>"Customer Name"</th>
                        <th>"Phone Number"</th>
                        <th>"Gender"</th>
                        <th>"Age"</th>
                        <th>"Product Category"</th>
                        <th class="table__cell--right">"Quantity"</th>
                        <th class="table__cell--right">"Final Amount"</th>
                        <th>"Payment Method"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|tx| {
                        let phone = tx.phone_number.clone();
                        view! {
                            <tr>
                                <td>{tx.transaction_id}</td>
                                <td>{format_date(&tx.date)}</td>
                                <td>{tx.customer_id}</td>
                                <td>{tx.customer_name}</td>
                                <td>
                                    <span>{tx.phone_number}</span>
                                    <button
                                        class="table__copy"
                                        title="Copy phone number"
                                        on:click=move |_| copy_to_clipboard(&phone)
                                    >
                                        {icon("copy")}
                                    </button>
                                </td>
                                <td>{tx.gender}</td>
                                <td>{tx.age}</td>
                                <td>{tx.product_category}</td>
                                <td class="table__cell--right">{format_quantity(tx.quantity)}</td>
                                <td class="table__cell--right">{format_amount(tx.final_amount)}</td>
                                <td>{tx.payment_method}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        }
        .into_any()
    };

    view! { <div class="table-wrapper">{body}</div> }
}
