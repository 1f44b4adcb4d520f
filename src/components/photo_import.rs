use log::{debug, warn};
use web_sys::{HtmlInputElement, Url};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PhotoImportProps {
    /// Receives an object URL for the chosen image.
    pub on_image_select: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(PhotoImport)]
pub fn photo_import(props: &PhotoImportProps) -> Html {
    let input_ref = use_node_ref();

    let on_change = {
        let cb = props.on_image_select.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                if file.type_().starts_with("image/") {
                    match Url::create_object_url_with_blob(&file) {
                        Ok(url) => cb.emit(url),
                        Err(err) => warn!("could not read {}: {err:?}", file.name()),
                    }
                } else {
                    debug!("ignoring non-image file {} ({})", file.name(), file.type_());
                }
            }
            // Allow picking the same file again.
            input.set_value("");
        })
    };
    let on_click = {
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    html! {<>
        <input ref={input_ref} type="file" accept="image/*" onchange={on_change} style="display:none;" />
        <button
            onclick={on_click}
            disabled={props.disabled}
            style="background:rgba(0,0,0,0.2); border:1px solid rgba(255,255,255,0.2); color:#fff; border-radius:6px; padding:6px 10px;"
        >
            {"Import Photo"}
        </button>
    </>}
}
