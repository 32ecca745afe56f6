//! Menu Form Component
//!
//! Create/edit form bound to a `DraftFormEngine`. Edit mode hydrates from
//! the server first; a successful submit returns to the menu list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::GatewayError;
use crate::components::NotFoundPage;
use crate::context::{use_app_context, AppGateway, Page};
use crate::draft::{DraftFormEngine, DraftPhase, SubmitOutcome};
use crate::validation::{DraftField, FieldPath};
use crate::view_state::{form_status, ViewStatus};

type EngineHandle = StoredValue<DraftFormEngine<AppGateway>, LocalStorage>;

#[component]
pub fn MenuForm(source_id: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let engine: EngineHandle = StoredValue::new_local(DraftFormEngine::new(ctx.gateway(), source_id));
    // Bumped when the size rows change shape, so typing does not rebuild them
    let size_layout = RwSignal::new(0u32);

    if engine.with_value(|e| e.is_edit_mode()) {
        let loader = engine.get_value();
        spawn_local(async move {
            loader.hydrate().await;
            let _ = size_layout.try_update(|v| *v += 1);
            ctx.refresh();
        });
    }
    on_cleanup(move || {
        engine.try_with_value(|e| e.dispose());
    });

    // Only changes on Loading -> Ready/NotFound/Error, so the form is built once
    let status = Memo::new(move |_| {
        ctx.track();
        engine.with_value(|e| form_status(&e.phase()))
    });

    view! {
        <div class="menu-form">
            <Show
                when=move || status.get() == ViewStatus::Ready
                fallback=move || match status.get() {
                    ViewStatus::NotFound => view! { <NotFoundPage /> }.into_any(),
                    ViewStatus::Error(msg) => view! { <p class="error">"Error: " {msg}</p> }.into_any(),
                    _ => view! { <p class="loading">"Loading..."</p> }.into_any(),
                }
            >
                <DraftFormFields engine=engine size_layout=size_layout />
            </Show>
        </div>
    }
}

#[component]
fn DraftFormFields(engine: EngineHandle, size_layout: RwSignal<u32>) -> impl IntoView {
    let ctx = use_app_context();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let engine = engine.get_value();
        let pending = engine.begin_submit();
        ctx.refresh();
        if let Ok(pending) = pending {
            spawn_local(async move {
                if let SubmitOutcome::Saved(_) = engine.complete_submit(pending).await {
                    ctx.navigate(Page::List);
                }
                ctx.refresh();
            });
        }
    };

    let field_rows = DraftField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <div class="form-group">
                    <label>{field.label()} ":"</label>
                    <input
                        class="form-input"
                        type="text"
                        prop:value=move || {
                            ctx.track();
                            engine.with_value(|e| e.field_value(field))
                        }
                        on:input=move |ev| {
                            engine.with_value(|e| e.set_field(field, &event_target_value(&ev)));
                            ctx.refresh();
                        }
                    />
                    {move || {
                        ctx.track();
                        field_error(engine, field.into())
                    }}
                </div>
            }
        })
        .collect_view();

    let size_rows = move || {
        size_layout.track();
        let sizes = engine.with_value(|e| e.draft().item.sizes);
        sizes
            .into_iter()
            .enumerate()
            .map(|(index, size)| {
                view! {
                    <div class="size-entry">
                        <input
                            class="form-input"
                            prop:value=size
                            on:input=move |ev| {
                                engine.with_value(|e| e.set_size(index, &event_target_value(&ev)));
                                ctx.refresh();
                            }
                        />
                        {move || {
                            ctx.track();
                            field_error(engine, FieldPath::Size(index))
                        }}
                        <button
                            class="button"
                            type="button"
                            on:click=move |_| {
                                engine.with_value(|e| e.remove_size(index));
                                size_layout.update(|v| *v += 1);
                                ctx.refresh();
                            }
                        >
                            "Delete"
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <form class="form-container" on:submit=on_submit>
            {field_rows}

            <div class="form-group">
                <label>"Sizes:"</label>
                {size_rows}
                <button
                    class="button"
                    type="button"
                    on:click=move |_| {
                        engine.with_value(|e| e.append_size());
                        size_layout.update(|v| *v += 1);
                        ctx.refresh();
                    }
                >
                    "Add"
                </button>
            </div>

            {move || {
                ctx.track();
                engine.with_value(|e| e.submit_error()).map(submit_error_view)
            }}

            <button
                class="button"
                type="submit"
                disabled=move || {
                    ctx.track();
                    engine.with_value(|e| e.phase()) == DraftPhase::Submitting
                }
            >
                {if engine.with_value(|e| e.is_edit_mode()) { "Update" } else { "Create" }}
            </button>
        </form>
    }
}

fn field_error(engine: EngineHandle, path: FieldPath) -> Option<impl IntoView> {
    engine
        .with_value(|e| e.draft().error(path).map(str::to_string))
        .map(|msg| view! { <div class="form-error">{msg}</div> })
}

fn submit_error_view(err: GatewayError) -> impl IntoView {
    let fields = match &err {
        GatewayError::Validation { fields, .. } => fields
            .iter()
            .map(|(field, msg)| view! { <li>{format!("{}: {}", field, msg)}</li> })
            .collect_view()
            .into_any(),
        _ => ().into_any(),
    };
    view! {
        <div class="form-error submit-error">
            <p>{err.to_string()}</p>
            <ul>{fields}</ul>
        </div>
    }
}
