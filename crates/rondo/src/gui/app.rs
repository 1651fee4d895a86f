use crate::config;
use crate::events::AppEvent;
use crate::gui::theme::ThemeColors;
use crate::gui::view;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use rondo_core::{DialController, Point};
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub controller: Rc<RefCell<DialController>>,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    DragBegin(Point),
    DragMove(Point),
    DragEnd(Point),
    DragCancel,
    Resize(f64, f64),
    SetValue(i64),
    ReloadConfig,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::SetValue(v) => AppMsg::SetValue(v),
            AppEvent::Reload => AppMsg::ReloadConfig,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (DialController, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Rondo"),
            set_default_width: 420,
            set_default_height: 420,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Quit);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,

                connect_resize[sender] => move |_, width, height| {
                    sender.input(AppMsg::Resize(f64::from(width), f64::from(height)));
                },

                add_controller = gtk::GestureDrag {
                    set_button: 1,

                    connect_drag_begin[sender] => move |_, x, y| {
                        sender.input(AppMsg::DragBegin(Point::new(x, y)));
                    },

                    connect_drag_update[sender] => move |gesture, dx, dy| {
                        if let Some((x, y)) = gesture.start_point() {
                            sender.input(AppMsg::DragMove(Point::new(x + dx, y + dy)));
                        }
                    },

                    connect_drag_end[sender] => move |gesture, dx, dy| {
                        if let Some((x, y)) = gesture.start_point() {
                            sender.input(AppMsg::DragEnd(Point::new(x + dx, y + dy)));
                        }
                    },

                    connect_cancel[sender] => move |_, _| {
                        sender.input(AppMsg::DragCancel);
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (controller, rx) = init;

        let controller = Rc::new(RefCell::new(controller));

        let model = AppModel {
            controller: controller.clone(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let controller_draw = controller.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                let Some(frame) = controller_draw.borrow().frame() else {
                    return;
                };
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                if let Err(e) = view::draw(cr, &frame, &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::DragBegin(pos) => {
                self.controller.borrow_mut().pointer_down(pos);
                self.drawing_area.queue_draw();
            }
            AppMsg::DragMove(pos) => {
                self.controller.borrow_mut().pointer_move(pos);
                self.drawing_area.queue_draw();
            }
            AppMsg::DragEnd(pos) => {
                let change = self.controller.borrow_mut().pointer_up(pos);
                if let Some(change) = change {
                    log::info!("value changed: {} -> {}", change.from, change.to);
                }
                self.drawing_area.queue_draw();
            }
            AppMsg::DragCancel => {
                let change = self.controller.borrow_mut().pointer_cancel();
                if let Some(change) = change {
                    log::info!("value changed: {} -> {}", change.from, change.to);
                }
                self.drawing_area.queue_draw();
            }
            AppMsg::Resize(width, height) => {
                self.controller.borrow_mut().resize(width, height);
                self.drawing_area.queue_draw();
            }
            AppMsg::SetValue(value) => {
                let change = self.controller.borrow_mut().set_value(value);
                if let Some(change) = change {
                    log::info!("value set: {} -> {}", change.from, change.to);
                }
                self.drawing_area.queue_draw();
            }
            AppMsg::ReloadConfig => match config::load_config() {
                Ok(new_config) => {
                    self.controller
                        .borrow_mut()
                        .apply_options(new_config.dial_options());
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
            AppMsg::Quit => relm4::main_application().quit(),
        }
    }
}
