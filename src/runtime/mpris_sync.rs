use crate::mpris::MprisHandle;
use crate::player::Controller;

pub fn update_mpris(mpris: &MprisHandle, controller: &Controller) {
    mpris.update(
        controller.state.status(),
        Some(controller.current().display()),
    );
}
