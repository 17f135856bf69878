use crate::app::{ApiCtx, Route, api_base_url};
use crate::components::loader::LoaderSpinner;
use crate::core::card::file_label;
use crate::core::format::padded_id;
use crate::core::gateway::{Gateway, retrieval_url};
use crate::core::table::{
    CellValue, Column, PAGE_SIZES, SortDirection, TableModel,
};
use gloo::console;
use moorage_api_models::{CidRef, ContentSummary};
use yew::prelude::*;
use yew_router::prelude::*;

/// The files listing is fetched in one shot rather than paged; the table
/// paginates client-side.
const FILES_FETCH_LIMIT: usize = 500;

fn id_cell(row: &ContentSummary) -> CellValue {
    CellValue::Number(row.id)
}

fn name_cell(row: &ContentSummary) -> CellValue {
    CellValue::Text(file_label(row))
}

fn size_cell(row: &ContentSummary) -> CellValue {
    CellValue::Bytes(row.size)
}

fn created_cell(row: &ContentSummary) -> CellValue {
    CellValue::date(row.created_at.as_deref())
}

fn columns() -> Vec<Column<ContentSummary>> {
    vec![
        Column {
            id: "id",
            header: "ID",
            accessor: id_cell,
            filterable: true,
            sortable: true,
        },
        Column {
            id: "name",
            header: "Name",
            accessor: name_cell,
            filterable: true,
            sortable: true,
        },
        Column {
            id: "size",
            header: "Size",
            accessor: size_cell,
            filterable: true,
            sortable: true,
        },
        Column {
            id: "created",
            header: "Created At",
            accessor: created_cell,
            filterable: false,
            sortable: true,
        },
    ]
}

/// Filterable, sortable, paginated table of every stored file.
#[function_component(FilesPage)]
pub(crate) fn files_page() -> Html {
    let api = use_context::<ApiCtx>().unwrap_or_else(|| ApiCtx::new(api_base_url()));
    let model = use_state(|| TableModel::new(columns(), Vec::new()));
    let gateway = use_state(Gateway::default);
    let loaded = use_state(|| false);

    {
        let api = api.clone();
        let model = model.clone();
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                let client = api.client.clone();
                yew::platform::spawn_local(async move {
                    match client.fetch_deals(0, FILES_FETCH_LIMIT).await {
                        Ok(page) => {
                            let mut next = (*model).clone();
                            next.set_rows(page);
                            model.set(next);
                        }
                        Err(err) => {
                            console::error!("files fetch failed", err.to_string());
                        }
                    }
                    loaded.set(true);
                });
                || ()
            },
            (),
        );
    }

    if !*loaded {
        return html! { <LoaderSpinner /> };
    }

    let on_gateway = {
        let gateway = gateway.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>()
                && let Some(choice) = Gateway::from_prefix(&select.value())
            {
                gateway.set(choice);
            }
        })
    };

    let headers = model
        .columns()
        .iter()
        .map(|column| {
            let column_id = column.id;
            let onclick = {
                let model = model.clone();
                Callback::from(move |_| {
                    let mut next = (*model).clone();
                    next.toggle_sort(column_id);
                    model.set(next);
                })
            };
            let indicator = model.sort_spec().and_then(|spec| {
                (spec.column == column_id).then(|| match spec.direction {
                    SortDirection::Ascending => " \u{25b2}",
                    SortDirection::Descending => " \u{25bc}",
                })
            });
            html! {
                <th key={column_id}>
                    if column.sortable {
                        <button class="sort-toggle" {onclick}>
                            {column.header}
                            {indicator.unwrap_or("")}
                        </button>
                    } else {
                        {column.header}
                    }
                </th>
            }
        })
        .collect::<Html>();

    let filter_inputs = model
        .columns()
        .iter()
        .map(|column| {
            let column_id = column.id;
            let cell = if column.filterable {
                let oninput = {
                    let model = model.clone();
                    Callback::from(move |event: InputEvent| {
                        if let Some(input) =
                            event.target_dyn_into::<web_sys::HtmlInputElement>()
                        {
                            let mut next = (*model).clone();
                            next.set_filter(column_id, &input.value());
                            model.set(next);
                        }
                    })
                };
                html! {
                    <input
                        placeholder={format!("Filter {}", column.header)}
                        value={model.filter_value(column_id).to_string()}
                        {oninput}
                    />
                }
            } else {
                html! {}
            };
            html! { <td key={column_id}>{cell}</td> }
        })
        .collect::<Html>();

    let body = model
        .page_rows()
        .into_iter()
        .map(|row| {
            let cells = model
                .columns()
                .iter()
                .map(|column| {
                    let cell = match column.id {
                        "id" => html! {
                            <Link<Route> to={Route::Content { id: row.id.to_string() }}>
                                {padded_id(row.id)}
                            </Link<Route>>
                        },
                        "name" => {
                            let label = file_label(row);
                            let cid = row.cid.as_ref().map(CidRef::as_str);
                            retrieval_url(gateway.prefix(), cid).map_or_else(
                                || html! { {label.clone()} },
                                |url| html! {
                                    <a href={url} target="_blank">{label.clone()}</a>
                                },
                            )
                        }
                        _ => html! { {(column.accessor)(row).display()} },
                    };
                    html! { <td key={column.id}>{cell}</td> }
                })
                .collect::<Html>();
            html! { <tr key={row.id}>{cells}</tr> }
        })
        .collect::<Html>();

    let paginate = |step: fn(&mut TableModel<ContentSummary>)| {
        let model = model.clone();
        Callback::from(move |_| {
            let mut next = (*model).clone();
            step(&mut next);
            model.set(next);
        })
    };
    let first = paginate(TableModel::first_page);
    let prev = paginate(TableModel::prev_page);
    let next = paginate(TableModel::next_page);
    let last = paginate(TableModel::last_page);

    let on_goto = {
        let model = model.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>()
                && let Ok(page) = input.value().parse::<i64>()
            {
                let mut next = (*model).clone();
                next.goto_page(page - 1);
                model.set(next);
            }
        })
    };

    let on_page_size = {
        let model = model.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>()
                && let Ok(size) = select.value().parse::<usize>()
            {
                let mut next = (*model).clone();
                next.set_page_size(size);
                model.set(next);
            }
        })
    };

    let gateway_options = Gateway::all()
        .into_iter()
        .map(|choice| {
            html! {
                <option
                    key={choice.prefix()}
                    value={choice.prefix()}
                    selected={choice == *gateway}
                >
                    {choice.label()}
                </option>
            }
        })
        .collect::<Html>();

    let size_options = PAGE_SIZES
        .into_iter()
        .map(|size| {
            html! {
                <option
                    key={size.to_string()}
                    value={size.to_string()}
                    selected={size == model.page_size()}
                >
                    {format!("Show {size}")}
                </option>
            }
        })
        .collect::<Html>();

    html! {
        <section class="files-page">
            <header class="files-header">
                <h1>{"Files"}</h1>
                <label>
                    {"Retrieval gateway"}
                    <select onchange={on_gateway}>{gateway_options}</select>
                </label>
            </header>
            <table class="files-table">
                <thead>
                    <tr>{headers}</tr>
                    <tr class="filter-row">{filter_inputs}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
            if model.view_len() == 0 {
                <p class="empty-state">{"No files match the current filters."}</p>
            }
            <footer class="pagination">
                <button onclick={first} disabled={!model.can_prev()}>{"\u{00ab}"}</button>
                <button onclick={prev} disabled={!model.can_prev()}>{"\u{2039}"}</button>
                <span>
                    {format!("Page {} of {}", model.current_page() + 1, model.page_count())}
                </span>
                <button onclick={next} disabled={!model.can_next()}>{"\u{203a}"}</button>
                <button onclick={last} disabled={!model.can_next()}>{"\u{00bb}"}</button>
                <label>
                    {"Go to"}
                    <input
                        type="number"
                        min="1"
                        max={model.page_count().to_string()}
                        onchange={on_goto}
                    />
                </label>
                <select onchange={on_page_size}>{size_options}</select>
            </footer>
        </section>
    }
}
