use crate::{desktop::WindowId, event::TrackerEvent};

/// `idObject` of notifications about the window itself rather than a child element.
pub const OBJID_WINDOW: i32 = 0;

macro_rules! win_event_builder {
  ($event_name:ident , $( ($int_val:literal, $enum_val:ident) ),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $event_name {
          $($enum_val),*
        }
        impl $event_name{
          pub fn from_id(id:u32)->Option<Self>{
            match id {
              $($int_val => Some(Self::$enum_val), )*
              _=>None
            }
          }
        }

    };
}

win_event_builder! { WinEvent,
  (32768, ObjectCreate),
  (32769, ObjectDestroy),
  (32770, ObjectShow),
  (32771, ObjectHide),
  (32779, ObjectLocationchange),
  (32783, ObjectParentchange),
}

/// Maps a raw WinEvent to what the tracker cares about. Destroy, hide and
/// location changes only count for the window object itself.
pub fn route(event: u32, window: WindowId, id_object: i32) -> Option<TrackerEvent> {
    let is_window = id_object == OBJID_WINDOW;
    match WinEvent::from_id(event)? {
        WinEvent::ObjectCreate => Some(TrackerEvent::Created(window)),
        WinEvent::ObjectShow => Some(TrackerEvent::Shown(window)),
        WinEvent::ObjectDestroy if is_window => Some(TrackerEvent::Destroyed(window)),
        WinEvent::ObjectHide if is_window => Some(TrackerEvent::Hidden(window)),
        WinEvent::ObjectLocationchange if is_window => Some(TrackerEvent::Moved(window)),
        WinEvent::ObjectParentchange => Some(TrackerEvent::ParentChanged(window)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARET: i32 = -8;

    #[test]
    fn ids_map_to_events() {
        assert_eq!(WinEvent::from_id(32779), Some(WinEvent::ObjectLocationchange));
        assert_eq!(WinEvent::from_id(32783), Some(WinEvent::ObjectParentchange));
        assert_eq!(WinEvent::from_id(3), None);
    }

    #[test]
    fn window_object_events_are_routed() {
        let window = WindowId(0x10);
        assert_eq!(route(32768, window, OBJID_WINDOW), Some(TrackerEvent::Created(window)));
        assert_eq!(route(32770, window, OBJID_WINDOW), Some(TrackerEvent::Shown(window)));
        assert_eq!(route(32769, window, OBJID_WINDOW), Some(TrackerEvent::Destroyed(window)));
        assert_eq!(route(32771, window, OBJID_WINDOW), Some(TrackerEvent::Hidden(window)));
        assert_eq!(route(32779, window, OBJID_WINDOW), Some(TrackerEvent::Moved(window)));
        assert_eq!(
            route(32783, window, OBJID_WINDOW),
            Some(TrackerEvent::ParentChanged(window))
        );
    }

    #[test]
    fn child_object_events_are_filtered() {
        let window = WindowId(0x10);
        assert_eq!(route(32779, window, CARET), None);
        assert_eq!(route(32771, window, CARET), None);
        assert_eq!(route(32769, window, CARET), None);
        assert_eq!(route(32770, window, CARET), Some(TrackerEvent::Shown(window)));
        // EVENT_SYSTEM_FOREGROUND
        assert_eq!(route(3, window, OBJID_WINDOW), None);
    }
}
