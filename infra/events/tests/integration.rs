
#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use arkiv_event_bus::*;

    #[tokio::test]
    async fn test_event_flow() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe::<CardSelected>().unwrap();

        let event = CardSelected(4);
        bus.publish(event.clone()).unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(*received, event);
    }

    #[tokio::test]
    async fn test_receiver_lagged_recovery() {
        let bus = EventBus::new();
        let capacity = 2;
        let mut rx = bus.subscribe_with_capacity::<CardSelected>(capacity).unwrap();

        let total_messages = 100;
        for i in 0..total_messages {
            bus.publish(CardSelected(i)).unwrap();
        }

        let first_received = loop {
            match rx.recv().await {
                Ok(event) => break event,
                Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => {},
                Err(err) => panic!("Should recover from lag: {err:?}"),
            }
        };

        assert!(
            first_received.0 >= (total_messages - capacity),
            "Should have skipped to the fresh tail of the buffer. Expected >= {}, got {}",
            total_messages - capacity,
            first_received.0
        );

        let second_received = rx.recv().await.expect("Should continue receiving");
        assert_eq!(second_received.0, first_received.0 + 1);
    }

    #[tokio::test]
    async fn test_multiple_subscribers_isolation() {
        let bus = EventBus::new();
        let mut rx1 = bus.subscribe::<CardSelected>().unwrap();
        let mut rx2 = bus.subscribe::<CardSelected>().unwrap();

        bus.publish(CardSelected(100)).unwrap();

        let res1 = rx1.recv().await.unwrap();
        let res2 = rx2.recv().await.unwrap();

        assert_eq!(res1.0, res2.0);
    }

    #[tokio::test]
    async fn test_multiple_event_types_are_isolated() {
        let bus = EventBus::new();
        let mut rx_selected = bus.subscribe::<CardSelected>().unwrap();
        let mut rx_hovered = bus.subscribe::<ArtifactHovered>().unwrap();

        bus.publish(CardSelected(7)).unwrap();
        bus.publish(ArtifactHovered(Some("tokyo".to_owned()))).unwrap();

        let got_selected = rx_selected.recv().await.unwrap();
        let got_hovered = rx_hovered.recv().await.unwrap();

        assert_eq!(got_selected.0, 7);
        assert_eq!(got_hovered.0.as_deref(), Some("tokyo"));
    }

    #[tokio::test]
    async fn test_bus_closure_detection() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe::<CardSelected>().unwrap();

        drop(bus);

        let result = rx.recv().await;
        assert!(
            matches!(result, Err(tokio::sync::broadcast::error::RecvError::Closed)),
            "receiver should observe bus closure"
        );
    }

    #[tokio::test]
    async fn test_shutdown_closes_all_channels() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe::<CardSelected>().unwrap();

        let closed = bus.shutdown();
        assert_eq!(closed, 1, "expected a single event channel to be closed");

        let result = rx.recv().await;
        assert!(
            matches!(result, Err(tokio::sync::broadcast::error::RecvError::Closed)),
            "receiver should observe channel closure after shutdown"
        );
    }

    #[tokio::test]
    async fn test_watch_latest_value_semantics() {
        let bus = EventBus::new();
        let rx = bus.subscribe_watch::<ProgressChanged>(ProgressChanged(0.0)).unwrap();

        bus.publish_watch(ProgressChanged(0.25)).unwrap();
        bus.publish_watch(ProgressChanged(0.75)).unwrap();

        // Only the latest value is retained.
        assert!((rx.borrow().0 - 0.75).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_watch_recv_waits_for_change() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe_watch::<ProgressChanged>(ProgressChanged(0.0)).unwrap();

        bus.publish_watch(ProgressChanged(1.0)).unwrap();

        let latest = EventReceiverExt::recv(&mut rx).await.expect("channel should stay open");
        assert!((latest.0 - 1.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_kind_mismatch_is_rejected() {
        let bus = EventBus::new();
        let _rx = bus.subscribe::<CardSelected>().unwrap();

        let err = bus.publish_watch(CardSelected(0)).unwrap_err();
        assert!(matches!(err, EventBusError::ChannelKindMismatch { .. }));
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let bus = EventBus::new();
        let err = bus.subscribe_with_capacity::<CardSelected>(0).unwrap_err();
        assert!(matches!(err, EventBusError::InvalidCapacity { .. }));
    }
}
