use std::panic::PanicInfo;

pub fn set_hook() {
    std::panic::set_hook(Box::new(panic_hook));
}

fn panic_hook(info: &PanicInfo<'_>) {
    let payload = info.payload();

    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic payload"
    };

    match info.location() {
        Some(location) => error!(
            panic.file = location.file(),
            panic.line = location.line(),
            panic.column = location.column(),
            "{message}",
        ),
        None => error!("{message}"),
    }
}
