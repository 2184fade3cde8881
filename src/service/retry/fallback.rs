//! The exhaustion fallback sequence.
//!
//! Runs once when an order's call attempts are exhausted or its retry
//! window expires: SMS to the recipient, email to the recipient, a
//! notification email to the buyer, and the refund. The four steps are
//! independent; a failed step is logged and the rest still run. Partial
//! completion is a valid terminal state, recorded in the two fallback
//! flags.

use chrono::{DateTime, Utc};
use sea_orm::EntityTrait;
use tracing::{error, info, warn};

use crate::{
    data::{order::OrderRepository, payment::PaymentRepository},
    error::AppError,
    model::order::Order,
};

use super::CallRetryService;

impl<'a> CallRetryService<'a> {
    pub(super) async fn run_fallback_sequence(
        &self,
        order: &Order,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        info!(
            order_id = order.id,
            attempts = order.call_attempts,
            "Handling exhausted call attempts"
        );

        let repo = OrderRepository::new(self.db);

        let mut sms_sent = order.fallback_sms_sent;
        if !sms_sent && !order.recipient_phone_number.is_empty() && self.send_sms_fallback(order).await
        {
            repo.set_fallback_sms_sent(order.id).await?;
            sms_sent = true;
        }

        let mut email_sent = order.fallback_email_sent;
        if !email_sent {
            if let Some(recipient_email) = order.recipient_email.as_deref() {
                if self.send_email_fallback(order, recipient_email).await {
                    repo.set_fallback_email_sent(order.id).await?;
                    email_sent = true;
                }
            }
        }

        self.notify_buyer(order, sms_sent, email_sent).await;

        self.process_refund(order, now).await?;

        info!(
            order_id = order.id,
            sms_sent, email_sent, "Fallback handling completed"
        );

        Ok(())
    }

    /// Step 1: SMS to the recipient announcing the waiting message.
    async fn send_sms_fallback(&self, order: &Order) -> bool {
        let body = format!(
            "Hi {}! Someone left you a special message on Callboard. \
             We could not reach you by phone - visit {} to hear it.",
            order.recipient_name, self.app_url
        );

        match self
            .telephony
            .send_sms(&order.recipient_phone_number, &body)
            .await
        {
            Ok(true) => {
                info!(
                    order_id = order.id,
                    to = %order.recipient_phone_number,
                    "Fallback SMS sent"
                );
                true
            }
            Ok(false) => {
                warn!(order_id = order.id, "Failed to send fallback SMS");
                false
            }
            Err(e) => {
                error!(order_id = order.id, error = %e, "Error sending fallback SMS");
                false
            }
        }
    }

    /// Step 2: email to the recipient with web-retrieval instructions.
    async fn send_email_fallback(&self, order: &Order, to: &str) -> bool {
        let subject = "You have a message waiting on Callboard";
        let body = format!(
            "<h2>Hi {}!</h2>\
             <p>Someone special left you a message on Callboard.</p>\
             <p><strong>We could not reach you by phone</strong>, but we do not \
             want you to miss it.</p>\
             <p>To hear your personalized message:</p>\
             <ol>\
             <li>Visit <a href='{}'>{}</a></li>\
             <li>Enter your phone number: {}</li>\
             <li>Listen to your message</li>\
             </ol>\
             <p>If you would rather we call again, reply and let us know a \
             better time to reach you.</p>",
            order.recipient_name, self.app_url, self.app_url, order.recipient_phone_number
        );

        match self.email.send_email(to, subject, &body).await {
            Ok(true) => {
                info!(order_id = order.id, to, "Fallback email sent");
                true
            }
            Ok(false) => {
                warn!(order_id = order.id, to, "Failed to send fallback email");
                false
            }
            Err(e) => {
                error!(order_id = order.id, error = %e, "Error sending fallback email");
                false
            }
        }
    }

    /// Step 3: tell the buyer the delivery failed and a refund follows.
    async fn notify_buyer(&self, order: &Order, sms_sent: bool, email_sent: bool) {
        let buyer = match entity::prelude::User::find_by_id(order.buyer_id)
            .one(self.db)
            .await
        {
            Ok(Some(buyer)) => buyer,
            Ok(None) => {
                warn!(
                    order_id = order.id,
                    buyer_id = order.buyer_id,
                    "Buyer not found for failure notification"
                );
                return;
            }
            Err(e) => {
                error!(order_id = order.id, error = %e, "Error loading buyer for failure notification");
                return;
            }
        };

        let subject = "Update on your Callboard order - a refund is on the way";
        let body = format!(
            "<h2>Update on your Callboard order</h2>\
             <p>We are sorry: after {} call attempts over {} consecutive days \
             we could not reach the recipient of your message.</p>\
             <p><strong>Order details:</strong></p>\
             <ul>\
             <li>Phone number: {}</li>\
             <li>Attempts made: {}/{}</li>\
             <li>SMS fallback sent: {}</li>\
             <li>Email fallback sent: {}</li>\
             </ul>\
             <p><strong>Refund:</strong> a full refund of ${:.2} will be returned \
             to your original payment method within 24-48 hours.</p>\
             <p>If you have questions or need help, contact us at {}</p>",
            order.call_attempts,
            self.policy.max_days,
            order.recipient_phone_number,
            order.call_attempts,
            self.policy.max_attempts(),
            if sms_sent { "yes" } else { "no" },
            if email_sent { "yes" } else { "no" },
            order.price,
            self.support_email
        );

        match self.email.send_email(&buyer.email, subject, &body).await {
            Ok(true) => {
                info!(order_id = order.id, to = %buyer.email, "Buyer failure notification sent")
            }
            Ok(false) => warn!(order_id = order.id, "Failed to send buyer notification"),
            Err(e) => {
                error!(order_id = order.id, error = %e, "Error sending buyer notification")
            }
        }
    }

    /// Step 4: refund the completed payment, if one exists.
    async fn process_refund(&self, order: &Order, now: DateTime<Utc>) -> Result<(), AppError> {
        let payments = PaymentRepository::new(self.db);

        let Some(payment) = payments.get_completed_by_order_id(order.id).await? else {
            warn!(order_id = order.id, "No completed payment found to refund");
            return Ok(());
        };

        payments.mark_refunded(payment.id, now).await?;
        OrderRepository::new(self.db)
            .set_payment_refunded(order.id, now)
            .await?;

        info!(
            order_id = order.id,
            payment_id = payment.id,
            amount = payment.amount,
            "Refund recorded for failed delivery"
        );

        Ok(())
    }
}
