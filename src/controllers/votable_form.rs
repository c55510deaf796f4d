//! Post and Topic Forms
//!
//! Creation and edit forms submit as multipart in the background and hand
//! the resulting page to Turbolinks. Picked images are previewed below the
//! file input; up to `max_file_count` of them are sent as `files[i]`.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use koboland_widgets::upload::{
    accepted_caption, rejected_caption, select_files, AcceptList, FileMeta,
};
use koboland_widgets::{attrs, ItemClass, UiConfig};
use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, File, FormData, HtmlElement, HtmlFormElement, HtmlInputElement, Url,
};

use super::{Binding, Controller};
use crate::components::{FilePreview, PreviewEntry, PreviewState};
use crate::navigation::{self, VisitAction};
use crate::{api, csrf, dom};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Create,
    Update,
}

/// Submission endpoint for a form, or `None` when the item class does not
/// support the mode
fn endpoint(mode: Mode, class: Option<&str>, config: &UiConfig) -> Option<String> {
    let endpoints = &config.endpoints;
    let url = match (mode, class) {
        (Mode::Create, Some("post")) => &endpoints.post_add,
        (Mode::Create, Some("topic")) => &endpoints.topic_add,
        (Mode::Create, _) => return None,
        (Mode::Update, class) => match ItemClass::from_attr(class) {
            ItemClass::Post => &endpoints.post_edit,
            ItemClass::Topic => &endpoints.topic_edit,
        },
    };
    Some(url.clone())
}

/// A picked file kept for submission, with the object URL its preview uses
struct Upload {
    file: File,
    src: String,
}

fn file_meta(file: &File) -> FileMeta {
    FileMeta {
        name: file.name(),
        mime: file.type_(),
        size: file.size() as u64,
    }
}

/// File input, the files accepted so far and the preview they drive
#[derive(Clone)]
struct Uploader {
    input: HtmlInputElement,
    accept: AcceptList,
    max: usize,
    uploads: Rc<RefCell<Vec<Upload>>>,
    set_preview: WriteSignal<PreviewState>,
}

/// Mounted preview view; dropping it unmounts the view
type PreviewMount = Box<dyn Any>;

impl Uploader {
    fn attach(form: &HtmlFormElement, owner: &Owner, max: usize) -> Option<(Self, PreviewMount)> {
        let input: HtmlInputElement = form
            .query_selector("input[type=\"file\"]")
            .ok()
            .flatten()?
            .dyn_into()
            .ok()?;
        let container = preview_container(&input)?;
        let accept = AcceptList::parse(&input.accept());
        input.set_value("");

        let (set_preview, mount) = owner.with(|| {
            let (preview, set_preview) = signal(PreviewState::Idle);
            let mount = mount_to(container, move || view! { <FilePreview state=preview /> });
            (set_preview, Box::new(mount) as PreviewMount)
        });

        let uploader = Self {
            input,
            accept,
            max,
            uploads: Rc::new(RefCell::new(Vec::new())),
            set_preview,
        };
        Some((uploader, mount))
    }

    fn picked(&self) -> Vec<File> {
        let Some(list) = self.input.files() else {
            return Vec::new();
        };
        (0..list.length()).filter_map(|i| list.get(i)).collect()
    }

    /// Redraw after the input changed
    fn refresh(&self) {
        let picked = self.picked();
        if picked.is_empty() {
            self.set_preview.set(PreviewState::Empty);
            return;
        }

        let metas: Vec<FileMeta> = picked.iter().map(file_meta).collect();
        let mut uploads = self.uploads.borrow_mut();
        let selection = select_files(uploads.len(), &metas, &self.accept, self.max);

        for &i in &selection.accepted {
            match Url::create_object_url_with_blob(&picked[i]) {
                Ok(src) => uploads.push(Upload { file: picked[i].clone(), src }),
                Err(e) => log::warn!("[UPLOAD] No preview for {}: {:?}", metas[i].name, e),
            }
        }

        let mut entries: Vec<PreviewEntry> = uploads
            .iter()
            .map(|upload| PreviewEntry::Image {
                src: upload.src.clone(),
                caption: accepted_caption(&file_meta(&upload.file)),
            })
            .collect();
        entries.extend(selection.rejected.iter().map(|&i| PreviewEntry::Invalid {
            caption: rejected_caption(&metas[i]),
        }));

        log::debug!(
            "[UPLOAD] {} files kept, {} rejected",
            uploads.len(),
            selection.rejected.len()
        );
        self.set_preview.set(PreviewState::Files(entries));
    }

    fn append_to(&self, data: &FormData) {
        for (i, upload) in self.uploads.borrow().iter().enumerate() {
            if let Err(e) = data.set_with_blob(&format!("files[{}]", i), &upload.file) {
                log::warn!("[UPLOAD] Failed to attach {}: {:?}", upload.file.name(), e);
            }
        }
    }

    /// Forget the accepted files and revoke their object URLs
    fn release(&self) {
        for upload in self.uploads.borrow_mut().drain(..) {
            let _ = Url::revoke_object_url(&upload.src);
        }
    }

    fn clear(&self) {
        self.input.set_value("");
        self.release();
        // The preview may already be disposed when a submit outlives its page
        let _ = self.set_preview.try_set(PreviewState::Idle);
    }
}

/// Whether the element after the file input can hold the preview
fn is_preview_slot(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("div")
}

/// The `div` right after the file input, emptied, or a new one when missing.
/// A restored snapshot still carries the previews rendered before it was cached.
fn preview_container(input: &HtmlInputElement) -> Option<HtmlElement> {
    if let Some(next) = input.next_element_sibling() {
        if is_preview_slot(&next.tag_name()) {
            next.set_inner_html("");
            return next.dyn_into().ok();
        }
    }
    let div = dom::document()?.create_element("div").ok()?;
    input.after_with_node_1(&div).ok()?;
    div.dyn_into().ok()
}

pub struct VotableFormController {
    form: HtmlFormElement,
    url: String,
    uploader: Option<Uploader>,
    preview_mount: RefCell<Option<PreviewMount>>,
    config: Rc<UiConfig>,
    owner: Owner,
}

fn connect(mode: Mode, element: &Element, config: &Rc<UiConfig>) -> Option<Rc<dyn Controller>> {
    let class = element.get_attribute(attrs::ITEM_CLASS);
    let Some(url) = endpoint(mode, class.as_deref(), config) else {
        log::warn!("[FORM] No {:?} endpoint for item class {:?}", mode, class);
        return None;
    };
    let Ok(form) = element.clone().dyn_into::<HtmlFormElement>() else {
        log::warn!("[FORM] {:?} controller needs a form element", mode);
        return None;
    };

    let owner = Owner::new();
    let (uploader, preview_mount) = match Uploader::attach(&form, &owner, config.max_file_count) {
        Some((uploader, mount)) => (Some(uploader), Some(mount)),
        None => (None, None),
    };
    log::debug!("[FORM] Connected {:?} form -> {}", mode, url);
    Some(Rc::new(VotableFormController {
        form,
        url,
        uploader,
        preview_mount: RefCell::new(preview_mount),
        config: config.clone(),
        owner,
    }))
}

pub fn connect_creation(element: &Element, config: &Rc<UiConfig>) -> Option<Rc<dyn Controller>> {
    connect(Mode::Create, element, config)
}

pub fn connect_update(element: &Element, config: &Rc<UiConfig>) -> Option<Rc<dyn Controller>> {
    connect(Mode::Update, element, config)
}

impl Controller for VotableFormController {
    fn handle(&self, method: &str, event: &Event) {
        match method {
            "submit" => {
                event.prevent_default();
                self.submit();
            }
            "preview" => {
                if let Some(uploader) = &self.uploader {
                    uploader.refresh();
                }
            }
            other => log::warn!("[FORM] Unknown action {}", other),
        }
    }

    fn bindings(&self) -> Vec<Binding> {
        let mut bindings = vec![Binding {
            target: self.form.clone().into(),
            event: "submit",
            method: "submit",
            capture: false,
        }];
        if let Some(uploader) = &self.uploader {
            bindings.push(Binding {
                target: uploader.input.clone().into(),
                event: "change",
                method: "preview",
                capture: false,
            });
        }
        bindings
    }

    fn disconnect(&self) {
        if let Some(uploader) = &self.uploader {
            uploader.release();
        }
        self.preview_mount.borrow_mut().take();
        self.owner.cleanup();
    }
}

impl VotableFormController {
    fn submit(&self) {
        let data = match FormData::new_with_form(&self.form) {
            Ok(data) => data,
            Err(e) => {
                log::error!("[FORM] Failed to read form: {:?}", e);
                return;
            }
        };
        if let Some(uploader) = &self.uploader {
            uploader.append_to(&data);
        }

        let url = self.url.clone();
        let token = csrf::token(&self.config.csrf_cookie);
        let form = self.form.clone();
        let uploader = self.uploader.clone();
        log::info!("[FORM] Submitting to {}", url);

        spawn_local(async move {
            let page = match api::submit_votable(&url, data, token.as_deref()).await {
                Ok(page) => page,
                Err(e) => {
                    log::error!("[FORM] Submit to {} failed: {}", url, e);
                    return;
                }
            };
            if !page.is_ok() {
                log::warn!("[FORM] {} answered {}", url, page.status);
                return;
            }
            form.reset();
            if let Some(uploader) = uploader {
                uploader.clear();
            }
            if let Err(e) = navigation::render_html(&page.url, &page.html, VisitAction::Restore) {
                log::error!("[FORM] Failed to render {}: {}", page.url, e);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(mode: Mode, class: Option<&str>) -> Option<String> {
        endpoint(mode, class, &UiConfig::default())
    }

    #[test]
    fn test_creation_needs_known_class() {
        assert_eq!(url(Mode::Create, Some("post")).as_deref(), Some("/api/post/add/"));
        assert_eq!(url(Mode::Create, Some("topic")).as_deref(), Some("/api/topic/add/"));
        assert_eq!(url(Mode::Create, Some("board")), None);
        assert_eq!(url(Mode::Create, None), None);
    }

    #[test]
    fn test_update_defaults_to_topic() {
        assert_eq!(url(Mode::Update, Some("post")).as_deref(), Some("/api/post/edit/"));
        assert_eq!(url(Mode::Update, Some("topic")).as_deref(), Some("/api/topic/edit/"));
        assert_eq!(url(Mode::Update, None).as_deref(), Some("/api/topic/edit/"));
    }

    #[test]
    fn test_preview_slot_is_a_following_div() {
        assert!(is_preview_slot("DIV"));
        assert!(is_preview_slot("div"));
        assert!(!is_preview_slot("P"));
        assert!(!is_preview_slot("BUTTON"));
    }
}
