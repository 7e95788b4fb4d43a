//! The expense entry form.

use maud::{Markup, html};
use time::Date;

use crate::{
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// The categories offered by the expense form's dropdown.
///
/// Advisory only: the database accepts any category string, so this list
/// constrains the form and nothing else.
pub const CATEGORIES: [&str; 6] = [
    "Food",
    "Transport",
    "Shopping",
    "Entertainment",
    "Health",
    "Other",
];

/// Renders the form for recording a new expense.
///
/// The form posts via htmx; on success the server redirects back to the
/// expenses page so the table and chart re-render from a fresh read, and on
/// failure the error fragment lands in the page's alert container.
pub fn expense_form(default_date: Date) -> Markup {
    html! {
        form
            hx-post=(endpoints::EXPENSES_API)
            hx-target-error="#alert-container"
            hx-swap="none"
            class="w-full max-w-md space-y-4"
        {
            div
            {
                label
                    for="date"
                    class=(FORM_LABEL_STYLE)
                {
                    "Date"
                }

                input
                    name="date"
                    id="date"
                    type="date"
                    value=(default_date)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="category"
                    class=(FORM_LABEL_STYLE)
                {
                    "Category"
                }

                select
                    name="category"
                    id="category"
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" { "Select a category" }

                    @for category in CATEGORIES {
                        option value=(category) { (category) }
                    }
                }
            }

            div
            {
                label
                    for="amount"
                    class=(FORM_LABEL_STYLE)
                {
                    "Amount"
                }

                div class="input-wrapper w-full"
                {
                    input
                        name="amount"
                        id="amount"
                        type="number"
                        step="0.01"
                        min="0"
                        placeholder="0.00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            button
                type="submit"
                class=(BUTTON_PRIMARY_STYLE)
            {
                "Add Expense"
            }
        }
    }
}
