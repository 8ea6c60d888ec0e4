// 折扣计算服务
// 根据交易总金额计算基础折扣与附加折扣, 并应用折扣上限

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 计算最终折扣比例
///
/// 最终比例 = min(基础折扣 + 附加折扣, 20%)
///
/// # Arguments
/// * `total_amount` - 交易总金额 (分)
///
/// # Returns
/// * 折扣比例 (0到0.20之间的小数)
pub fn calculate_discounts(total_amount: i64) -> Decimal {
    log::debug!("Calculate Discounts based on Total Amount: {}", total_amount);

    let base_discount = calculate_base_discount(total_amount);
    let conditional_discount = calculate_conditional_discount(total_amount);

    // 折扣上限20%
    let max_discount = Decimal::new(20, 2);
    (base_discount + conditional_discount).min(max_discount)
}

/// 计算折扣金额 (分)
///
/// 折扣金额 = totalAmount * 折扣比例, 小数部分向零截断
///
/// # Arguments
/// * `total_amount` - 交易总金额 (分)
///
/// # Returns
/// * 折扣金额, 数值超出可表示范围时返回None
pub fn calculate_discount_amount(total_amount: i64) -> Option<i64> {
    let fraction = calculate_discounts(total_amount);
    (Decimal::from(total_amount) * fraction).trunc().to_i64()
}

/// 按金额档位计算基础折扣
fn calculate_base_discount(total_amount: i64) -> Decimal {
    log::debug!("Calculate Base Discount.");

    // 金额单位为分, 20000分即200.00令吉
    if total_amount < 20000 {
        return Decimal::ZERO;
    }
    if total_amount <= 50000 {
        return Decimal::new(5, 2);
    }
    if total_amount <= 80000 {
        return Decimal::new(7, 2);
    }
    if total_amount <= 120000 {
        return Decimal::new(10, 2);
    }
    Decimal::new(15, 2)
}

/// 计算附加折扣
///
/// 素数折扣优先于尾数5折扣, 两者不叠加
fn calculate_conditional_discount(total_amount: i64) -> Decimal {
    log::debug!("Calculate Conditional Discount.");

    // 分转换为令吉 (整数截断)
    let amount = total_amount / 100;

    // 素数折扣
    if total_amount > 50000 && is_prime(amount) {
        return Decimal::new(8, 2);
    }

    // 尾数5折扣
    if total_amount > 90000 && amount % 10 == 5 {
        return Decimal::new(10, 2);
    }

    Decimal::ZERO
}

/// 判断是否为素数 (试除法)
fn is_prime(number: i64) -> bool {
    if number < 2 {
        return false;
    }
    if number == 2 {
        return true;
    }
    if number % 2 == 0 {
        return false;
    }

    let boundary = (number as f64).sqrt().floor() as i64;
    for divisor in (3..=boundary).step_by(2) {
        if number % divisor == 0 {
            return false;
        }
    }

    true
}
