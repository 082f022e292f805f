use crate::kernel::geometry::{hit_test, WindowHit};
use crate::kernel::Action;

use super::DispatchResult;

impl super::Store {
    pub(super) fn reduce_pointer_action(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::PointerDown { pos, button } => {
                let mut state_changed = false;
                if self.state.context_menu.visible {
                    self.state.context_menu = Default::default();
                    state_changed = true;
                }

                let metrics = self.state.config.handle_metrics();
                let target = self
                    .state
                    .windows
                    .paint_order()
                    .into_iter()
                    .rev()
                    .find_map(|w| {
                        hit_test(w.bounds, pos, metrics)
                            .map(|hit| (w.id.clone(), hit, w.bounds, w.is_maximized))
                    });
                let Some((window, hit, bounds, maximized)) = target else {
                    return DispatchResult::changed(state_changed);
                };

                state_changed |= self.state.windows.focus(&window);
                if maximized {
                    return DispatchResult::changed(state_changed);
                }

                state_changed |= match hit {
                    WindowHit::TitleBar => {
                        self.state
                            .gesture
                            .begin_drag(window, pos, bounds.position, button)
                    }
                    WindowHit::Resize(direction) => {
                        self.state.gesture.begin_resize(window, direction, pos, bounds)
                    }
                    WindowHit::Body => false,
                };
                DispatchResult::changed(state_changed)
            }
            Action::PointerMove { pos } => {
                let Some((window, update)) = self.state.gesture.pointer_move(pos) else {
                    return DispatchResult::unchanged();
                };
                DispatchResult::changed(self.state.windows.apply_geometry(&window, update))
            }
            Action::PointerUp => DispatchResult::changed(self.state.gesture.pointer_up()),
            _ => DispatchResult::unchanged(),
        }
    }
}
